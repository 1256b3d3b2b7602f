use crate::UserDto;

use sg_core::{NewUser, User, UserApproval};

use chrono::{TimeZone, Utc};

fn sample_user() -> User {
    let mut user = User::new(1, NewUser::new("jane@socialmarketing.com", "Jane Doe"));
    user.created_at = Utc.with_ymd_and_hms(2025, 7, 14, 18, 21, 2).unwrap();
    user
}

#[test]
fn test_user_dto_serializes_camel_case_with_millis() {
    let json = serde_json::to_value(UserDto::from(sample_user())).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["email"], "jane@socialmarketing.com");
    assert_eq!(json["isApproved"], false);
    assert!(json["approvedBy"].is_null());
    assert_eq!(json["createdAt"], "2025-07-14T18:21:02.000Z");
}

#[test]
fn test_approved_user_dto_carries_approver() {
    let user = sample_user().with_approval(&UserApproval::approved_by("system"));

    let json = serde_json::to_value(UserDto::from(user)).unwrap();

    assert_eq!(json["isApproved"], true);
    assert_eq!(json["approvedBy"], "system");
}
