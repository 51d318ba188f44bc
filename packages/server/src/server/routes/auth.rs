use axum::{extract::Extension, Json};

use crate::common::AppResult;
use crate::domains::agents::{register_agent, AgentData, SignupInput};
use crate::domains::auth::{login, LoginForm, TokenResponse};
use crate::server::app::AxumAppState;
use crate::server::extract::{ValidatedForm, ValidatedJson};

/// `POST /signup`
pub async fn signup_handler(
    Extension(state): Extension<AxumAppState>,
    ValidatedJson(input): ValidatedJson<SignupInput>,
) -> AppResult<Json<AgentData>> {
    let agent = register_agent(input, state.bcrypt_cost, &state.db_pool).await?;
    Ok(Json(agent.into()))
}

/// `POST /login` (OAuth2 password form: `username` = email)
pub async fn login_handler(
    Extension(state): Extension<AxumAppState>,
    ValidatedForm(form): ValidatedForm<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    let token = login(form, &state.jwt_service, &state.db_pool).await?;
    Ok(Json(token))
}
