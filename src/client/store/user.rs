use crate::model::user::UserDto;

/// Signed-in user shared through context.
///
/// `fetched` turns true once the session has been checked, so pages can tell a signed-out
/// visitor apart from a request still in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}
