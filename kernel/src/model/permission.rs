//! Pure authorization checks. Handlers run these before any mutating
//! repository call; nothing here touches storage.

use crate::model::{booking::BookingStatus, id::UserId, role::Role, user::User};
use shared::error::{AppError, AppResult};

/// Rejects the caller unless their role is one of `required_roles` and, when
/// `resource_owner` is given, they own the resource. Admins bypass the
/// ownership check but not the role check.
pub fn authorize(
    user: &User,
    required_roles: &[Role],
    resource_owner: Option<UserId>,
) -> AppResult<()> {
    if !required_roles.contains(&user.role) {
        return Err(AppError::ForbiddenOperation(format!(
            "role {} may not perform this operation",
            user.role
        )));
    }
    if let Some(owner_id) = resource_owner {
        if user.role != Role::Admin && user.user_id != owner_id {
            return Err(AppError::ForbiddenOperation(
                "the resource belongs to another user".into(),
            ));
        }
    }
    Ok(())
}

/// Listing hostels additionally requires the agent to have been verified by
/// an admin.
pub fn authorize_verified_agent(user: &User) -> AppResult<()> {
    authorize(user, &[Role::Agent], None)?;
    if !user.verified_status {
        return Err(AppError::ForbiddenOperation(
            "only verified agents can list hostels".into(),
        ));
    }
    Ok(())
}

/// A booking may only be mutated by its student, the owning agent of its
/// hostel, or an admin.
pub fn authorize_booking_update(user: &User, student_id: UserId, agent_id: UserId) -> AppResult<()> {
    match user.role {
        Role::Admin => Ok(()),
        Role::Student if user.user_id == student_id => Ok(()),
        Role::Agent if user.user_id == agent_id => Ok(()),
        _ => Err(AppError::ForbiddenOperation(
            "only the booking's student or the hostel's agent may modify it".into(),
        )),
    }
}

/// Students may only cancel; confirming and completing is the agent's side of
/// the lifecycle.
pub fn authorize_status_change(user: &User, next: BookingStatus) -> AppResult<()> {
    if user.role == Role::Student && next != BookingStatus::Cancelled {
        return Err(AppError::ForbiddenOperation(
            "students may only cancel their bookings".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            user_id: UserId::new(),
            email: "someone@example.com".into(),
            first_name: "Someone".into(),
            last_name: None,
            role,
            verified_status: false,
            school_id: None,
        }
    }

    #[test]
    fn wrong_role_is_rejected() {
        let student = user(Role::Student);
        assert!(authorize(&student, &[Role::Agent], None).is_err());
        assert!(authorize(&student, &[Role::Student], None).is_ok());
    }

    #[test]
    fn non_owner_is_rejected() {
        let agent = user(Role::Agent);
        assert!(authorize(&agent, &[Role::Agent], Some(agent.user_id)).is_ok());
        assert!(authorize(&agent, &[Role::Agent], Some(UserId::new())).is_err());
    }

    #[test]
    fn admin_bypasses_ownership_but_not_role() {
        let admin = user(Role::Admin);
        assert!(authorize(&admin, &[Role::Agent, Role::Admin], Some(UserId::new())).is_ok());
        assert!(authorize(&admin, &[Role::Student], None).is_err());
    }

    #[test]
    fn unverified_agent_cannot_list_hostels() {
        let mut agent = user(Role::Agent);
        assert!(authorize_verified_agent(&agent).is_err());
        agent.verified_status = true;
        assert!(authorize_verified_agent(&agent).is_ok());

        let mut admin = user(Role::Admin);
        admin.verified_status = true;
        assert!(authorize_verified_agent(&admin).is_err());
    }

    #[test]
    fn only_participants_may_touch_a_booking() {
        let student = user(Role::Student);
        let agent = user(Role::Agent);
        let other_agent = user(Role::Agent);
        let admin = user(Role::Admin);

        let student_id = student.user_id;
        let agent_id = agent.user_id;

        assert!(authorize_booking_update(&student, student_id, agent_id).is_ok());
        assert!(authorize_booking_update(&agent, student_id, agent_id).is_ok());
        assert!(authorize_booking_update(&admin, student_id, agent_id).is_ok());
        // A different agent gets rejected even though the role matches.
        assert!(authorize_booking_update(&other_agent, student_id, agent_id).is_err());
    }

    #[test]
    fn students_may_only_cancel() {
        let student = user(Role::Student);
        assert!(authorize_status_change(&student, BookingStatus::Cancelled).is_ok());
        assert!(authorize_status_change(&student, BookingStatus::Confirmed).is_err());
        assert!(authorize_status_change(&student, BookingStatus::Completed).is_err());

        let agent = user(Role::Agent);
        for next in [
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            assert!(authorize_status_change(&agent, next).is_ok());
        }
    }
}
