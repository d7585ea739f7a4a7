use super::*;

#[test]
fn profile_detail_path_formats_expected_path() {
    assert_eq!(profile_detail_path("alice"), "/profile/alice");
}

#[test]
fn static_paths_match_route_table() {
    assert_eq!(HOME_PATH, "/");
    assert_eq!(LOGIN_PATH, "/login");
    assert_eq!(MY_PROFILE_PATH, "/profile/me");
}
