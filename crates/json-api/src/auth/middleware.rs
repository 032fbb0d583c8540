//! Admin auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::warn;

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    if !state.admin_token.matches(token) {
        warn!("rejected admin request with invalid token");

        res.render(StatusError::unauthorized().brief("Invalid admin token"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
