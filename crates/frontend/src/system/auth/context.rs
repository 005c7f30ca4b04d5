use contracts::system::app::AppAction;
use contracts::system::auth::{LoggedIn, OrgRole, SessionTokens, UserProfile};

use super::storage;
use crate::layout::global_context::Dispatcher;
use crate::shared::constants::routes;
use crate::shared::navigation::Navigator;
use crate::shared::storage::KeyValueStorage;

/// Actions that reset the store to a signed-out session, in dispatch order.
pub fn signed_out_actions() -> [AppAction; 4] {
    [
        AppAction::LoggedIn(LoggedIn {
            is_logged_in: false,
        }),
        AppAction::UpdateUserOrgRole(OrgRole {
            org: None,
            role: None,
        }),
        AppAction::UpdateUser(UserProfile::signed_out()),
        AppAction::UpdateUserAccessRefreshAccessToken(SessionTokens::default()),
    ]
}

/// Sign out locally: clear persisted tokens, reset the store, go to login.
///
/// Everything runs synchronously within the calling event handler. There is
/// no server round trip.
pub fn do_logout<S, D, N>(storage: &S, dispatcher: &D, navigator: &N)
where
    S: KeyValueStorage,
    D: Dispatcher,
    N: Navigator,
{
    log::info!("Signing out");

    storage::clear_session(storage);

    for action in signed_out_actions() {
        dispatcher.dispatch(action);
    }

    navigator.navigate(routes::LOGIN);
}
