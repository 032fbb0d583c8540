//! State

use std::sync::Arc;

use precast_app::context::AppContext;

use crate::auth::AdminToken;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) admin_token: AdminToken,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, admin_token: AdminToken) -> Self {
        Self { app, admin_token }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, admin_token: AdminToken) -> Arc<Self> {
        Arc::new(Self::new(app, admin_token))
    }
}
