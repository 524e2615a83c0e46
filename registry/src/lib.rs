use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::hostel::HostelRepositoryImpl;
use adapter::repository::location::LocationRepositoryImpl;
use adapter::repository::notifier::LoggingBookingNotifier;
use adapter::repository::school::SchoolRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::booking::BookingRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::hostel::HostelRepository;
use kernel::repository::location::LocationRepository;
use kernel::repository::notifier::BookingNotifier;
use kernel::repository::school::SchoolRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    school_repository: Arc<dyn SchoolRepository>,
    location_repository: Arc<dyn LocationRepository>,
    hostel_repository: Arc<dyn HostelRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    booking_notifier: Arc<dyn BookingNotifier>,
}

impl AppRegistry {
    pub fn new(
        pool: ConnectionPool,
        redis_client: Arc<RedisClient>,
        app_config: AppConfig,
    ) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let school_repository = Arc::new(SchoolRepositoryImpl::new(pool.clone()));
        let location_repository = Arc::new(LocationRepositoryImpl::new(pool.clone()));
        let hostel_repository = Arc::new(HostelRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let booking_notifier = Arc::new(LoggingBookingNotifier::new());
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            school_repository,
            location_repository,
            hostel_repository,
            booking_repository,
            booking_notifier,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn school_repository(&self) -> Arc<dyn SchoolRepository> {
        self.school_repository.clone()
    }

    pub fn location_repository(&self) -> Arc<dyn LocationRepository> {
        self.location_repository.clone()
    }

    pub fn hostel_repository(&self) -> Arc<dyn HostelRepository> {
        self.hostel_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn booking_notifier(&self) -> Arc<dyn BookingNotifier> {
        self.booking_notifier.clone()
    }
}
