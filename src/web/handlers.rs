//! Request handlers. Each one reads the session, runs at most one database
//! closure and answers with a page or a redirect.

use crate::core::add::AddLogic;
use crate::core::clear::ClearLogic;
use crate::core::login::LoginLogic;
use crate::core::toggle::ToggleLogic;
use crate::db::queries::load_items;
use crate::errors::{AppError, AppResult};
use crate::web::AppState;
use crate::web::session::{CurrentUser, Session};
use crate::web::views;
use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    #[serde(default)]
    pub text: String,
}

pub async fn index(jar: SignedCookieJar) -> Redirect {
    if Session::from_jar(&jar).username().is_some() {
        Redirect::to("/list")
    } else {
        Redirect::to("/login")
    }
}

pub async fn login_form(jar: SignedCookieJar) -> AppResult<Response> {
    let mut session = Session::from_jar(&jar);
    let flashes = session.take_flashes();
    let page = Html(views::login_page(&flashes));
    Ok((session.save(jar)?, page).into_response())
}

pub async fn login(jar: SignedCookieJar, Form(form): Form<LoginForm>) -> AppResult<Response> {
    let mut session = Session::from_jar(&jar);

    match LoginLogic::apply(&form.name) {
        Ok(name) => {
            tracing::info!(user = %name, "login");
            session.flash(format!("Logged in as {name}"));
            session.login(name);
            Ok((session.save(jar)?, Redirect::to("/list")).into_response())
        }
        Err(e) if e.is_user_facing() => {
            session.flash(e.to_string());
            Ok((session.save(jar)?, Redirect::to("/login")).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn logout(jar: SignedCookieJar) -> AppResult<Response> {
    let mut session = Session::from_jar(&jar);
    if let Some(name) = session.username() {
        tracing::info!(user = %name, "logout");
    }
    session.clear();
    session.flash("You have been logged out.");
    Ok((session.save(jar)?, Redirect::to("/login")).into_response())
}

pub async fn shopping_list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: SignedCookieJar,
) -> AppResult<Response> {
    let items = state.store.call(load_items).await?;

    let mut session = Session::from_jar(&jar);
    let flashes = session.take_flashes();
    let page = Html(views::list_page(&user, &items, &flashes));
    Ok((session.save(jar)?, page).into_response())
}

pub async fn add_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: SignedCookieJar,
    Form(form): Form<AddItemForm>,
) -> AppResult<Response> {
    let result = state
        .store
        .call(move |pool| AddLogic::apply(pool, &form.text, &user))
        .await;

    match result {
        Ok(_) => Ok(Redirect::to("/list").into_response()),
        Err(e) if e.is_user_facing() => {
            let mut session = Session::from_jar(&jar);
            session.flash(e.to_string());
            Ok((session.save(jar)?, Redirect::to("/list")).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn toggle_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(raw_id): Path<String>,
) -> AppResult<Redirect> {
    let id: i64 = raw_id.parse().map_err(|_| AppError::NotFound)?;

    state
        .store
        .call(move |pool| ToggleLogic::apply(pool, id, &user))
        .await?;

    Ok(Redirect::to("/list"))
}

pub async fn clear_done(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    jar: SignedCookieJar,
) -> AppResult<Response> {
    state.store.call(ClearLogic::apply).await?;

    let mut session = Session::from_jar(&jar);
    session.flash("Cleared completed items.");
    Ok((session.save(jar)?, Redirect::to("/list")).into_response())
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
