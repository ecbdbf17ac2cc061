//! Application routes producing each kind of failure

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use faultline_core::{ConstraintViolation, MissingParameter};
use faultline_server::{Checked, Failure};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct NewItem {
    name: String,
    quantity: i64,
}

#[derive(Debug, Deserialize)]
struct Search {
    q: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/items", post(create_item))
        .route("/items/{id}", get(get_item))
        .route("/plain/items", post(create_item_plain))
        .route("/plain/items/{id}", get(get_item_plain))
        .route("/search", get(search))
        .route("/lookup", get(lookup))
        .route("/echo", post(echo))
        .route("/admin/report", get(|| async { "quarterly report" }))
        .route("/boom", get(boom))
        .route("/panic", get(explode))
}

async fn create_item(Checked(Json(item)): Checked<Json<NewItem>>) -> Result<(StatusCode, String), Failure> {
    if item.quantity <= 0 {
        return Err(ConstraintViolation::new("quantity", "must be positive").into());
    }

    Ok((StatusCode::CREATED, item.name))
}

async fn get_item(Checked(Path(id)): Checked<Path<u32>>) -> String {
    format!("item {id}")
}

async fn create_item_plain(Json(item): Json<NewItem>) -> (StatusCode, String) {
    (StatusCode::CREATED, format!("{} x{}", item.name, item.quantity))
}

async fn get_item_plain(Path(id): Path<u32>) -> String {
    format!("item {id}")
}

async fn search(Checked(Query(search)): Checked<Query<Search>>) -> String {
    search.q
}

async fn lookup(Query(params): Query<HashMap<String, String>>) -> Result<String, Failure> {
    let key = params.get("key").ok_or_else(|| MissingParameter::new("key"))?;
    Ok(format!("value for {key}"))
}

async fn echo(payload: Result<Json<serde_json::Value>, JsonRejection>) -> Result<Json<serde_json::Value>, Failure> {
    let Json(value) = payload?;
    Ok(Json(value))
}

async fn boom() -> Result<String, Failure> {
    let error = anyhow::anyhow!("NullPointerException: dashboard widget was null").context("rendering dashboard");
    Err(error.into())
}

async fn explode() -> &'static str {
    let slots: Vec<&'static str> = Vec::new();
    slots[3]
}
