// crates/reqres-scenarios/src/catalog.rs
// ============================================================================
// Module: Scenario Catalog
// Description: The fixed set of ReqRes conformance scenarios.
// Purpose: Issue each scenario's requests and assert the remote contract.
// Dependencies: reqres-client, reqres-contract, serde, serde_json
// ============================================================================

//! ## Overview
//! Each [`ScenarioId`] maps to one async procedure. Procedures receive the
//! client and schema registry explicitly; none reads global state. The
//! catalog, with request, expected status, and assertion:
//!
//! | Scenario | Request | Status | Assertion |
//! |---|---|---|---|
//! | `list_users` | `GET /users?page=2` | 200 | `list_users` schema |
//! | `single_user` | `GET /users/2` | 200 | `single_user` schema |
//! | `create_user` | `POST /users` | 201 | `created_user` schema |
//! | `single_user_not_found` | `GET /users/23` | 404 | body is `{}` |
//! | `unknown_resource_list` | `GET /unknown?per_page=1` | 200 | first color literals |
//! | `unknown_resource_not_found` | `GET /unknown/23` | 404 | body is `{}` |
//! | `update_user` | `POST /users`, `PUT /users/{id}` | 200 | echoed name |
//! | `delete_user` | `POST /users`, `DELETE /users/{id}` | 204 | none |
//! | `register_success` | `POST /register` | 200 | `success_reg` schema, token |
//! | `register_missing_password` | `POST /register` | 400 | error text |
//! | `register_undefined_user` | `POST /register` | 400 | error text |
//! | `login_success` | `POST /login` | 200 | token |
//! | `login_missing_password` | `POST /login` | 400 | error text |

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use reqres_client::ApiClient;
use reqres_client::ApiRequest;
use reqres_client::ApiResponse;
use reqres_contract::ResponseSchema;
use reqres_contract::SchemaRegistry;
use serde::Serialize;
use serde_json::json;

use crate::assertions::created_id;
use crate::assertions::expect_empty_object;
use crate::assertions::expect_schema;
use crate::assertions::expect_status;
use crate::assertions::expect_str;
use crate::error::ScenarioError;
use crate::fixtures;

// ============================================================================
// SECTION: Scenario Identifiers
// ============================================================================

/// Conformance scenarios, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioId {
    /// Paginated user list matches its schema.
    ListUsers,
    /// Single user envelope matches its schema.
    SingleUser,
    /// Created user echo matches its schema.
    CreateUser,
    /// Unknown user id yields 404 and `{}`.
    SingleUserNotFound,
    /// First unknown resource is cerulean.
    UnknownResourceList,
    /// Unknown resource id yields 404 and `{}`.
    UnknownResourceNotFound,
    /// Renaming a freshly created user echoes the new name.
    UpdateUser,
    /// Deleting a freshly created user yields 204.
    DeleteUser,
    /// Registering the predefined user returns the fixed token.
    RegisterSuccess,
    /// Registering without a password is rejected.
    RegisterMissingPassword,
    /// Registering an unknown email is rejected.
    RegisterUndefinedUser,
    /// Logging in the predefined user returns the fixed token.
    LoginSuccess,
    /// Logging in without a password is rejected.
    LoginMissingPassword,
}

impl ScenarioId {
    /// Returns every scenario in catalog order.
    #[must_use]
    pub const fn all() -> [Self; 13] {
        [
            Self::ListUsers,
            Self::SingleUser,
            Self::CreateUser,
            Self::SingleUserNotFound,
            Self::UnknownResourceList,
            Self::UnknownResourceNotFound,
            Self::UpdateUser,
            Self::DeleteUser,
            Self::RegisterSuccess,
            Self::RegisterMissingPassword,
            Self::RegisterUndefinedUser,
            Self::LoginSuccess,
            Self::LoginMissingPassword,
        ]
    }

    /// Returns the stable scenario name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListUsers => "list_users",
            Self::SingleUser => "single_user",
            Self::CreateUser => "create_user",
            Self::SingleUserNotFound => "single_user_not_found",
            Self::UnknownResourceList => "unknown_resource_list",
            Self::UnknownResourceNotFound => "unknown_resource_not_found",
            Self::UpdateUser => "update_user",
            Self::DeleteUser => "delete_user",
            Self::RegisterSuccess => "register_success",
            Self::RegisterMissingPassword => "register_missing_password",
            Self::RegisterUndefinedUser => "register_undefined_user",
            Self::LoginSuccess => "login_success",
            Self::LoginMissingPassword => "login_missing_password",
        }
    }

    /// Looks a scenario up by its stable name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|scenario| scenario.as_str() == name)
    }

    /// Runs the scenario.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScenarioError`] the scenario hits.
    pub async fn run(
        self,
        client: &ApiClient,
        registry: &SchemaRegistry,
    ) -> Result<(), ScenarioError> {
        match self {
            Self::ListUsers => list_users(client, registry).await,
            Self::SingleUser => single_user(client, registry).await,
            Self::CreateUser => create_user(client, registry).await,
            Self::SingleUserNotFound => {
                not_found(client, &format!("/users/{}", fixtures::MISSING_ID)).await
            }
            Self::UnknownResourceList => unknown_resource_list(client).await,
            Self::UnknownResourceNotFound => {
                not_found(client, &format!("/unknown/{}", fixtures::MISSING_ID)).await
            }
            Self::UpdateUser => update_user(client).await,
            Self::DeleteUser => delete_user(client).await,
            Self::RegisterSuccess => register_success(client, registry).await,
            Self::RegisterMissingPassword => {
                rejected(
                    client,
                    "/register",
                    fixtures::PASSWORDLESS_EMAIL,
                    None,
                    fixtures::MISSING_PASSWORD,
                )
                .await
            }
            Self::RegisterUndefinedUser => {
                rejected(
                    client,
                    "/register",
                    fixtures::UNDEFINED_EMAIL,
                    Some(fixtures::UNDEFINED_PASSWORD),
                    fixtures::UNDEFINED_USER,
                )
                .await
            }
            Self::LoginSuccess => login_success(client).await,
            Self::LoginMissingPassword => {
                rejected(
                    client,
                    "/login",
                    fixtures::PASSWORDLESS_EMAIL,
                    None,
                    fixtures::MISSING_PASSWORD,
                )
                .await
            }
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Scenario Procedures
// ============================================================================

/// `GET /users?page=2` returns a schema-valid page.
async fn list_users(client: &ApiClient, registry: &SchemaRegistry) -> Result<(), ScenarioError> {
    let request = ApiRequest::get("/users").with_query("page", 2_i64);
    let response = send(client, &request).await?;
    expect_status(&label(&request), &response, 200)?;
    expect_schema(registry, ResponseSchema::ListUsers, &response)
}

/// `GET /users/2` returns a schema-valid user.
async fn single_user(client: &ApiClient, registry: &SchemaRegistry) -> Result<(), ScenarioError> {
    let request = ApiRequest::get(format!("/users/{}", fixtures::EXISTING_USER_ID));
    let response = send(client, &request).await?;
    expect_status(&label(&request), &response, 200)?;
    expect_schema(registry, ResponseSchema::SingleUser, &response)
}

/// `POST /users` returns 201 with a schema-valid echo.
async fn create_user(client: &ApiClient, registry: &SchemaRegistry) -> Result<(), ScenarioError> {
    let request = ApiRequest::post("/users", json!({ "name": "neo", "job": "chosen_one" }));
    let response = send(client, &request).await?;
    expect_status(&label(&request), &response, 201)?;
    expect_schema(registry, ResponseSchema::CreatedUser, &response)
}

/// Reads are side-effect free, so repeating this yields the same result.
async fn not_found(client: &ApiClient, path: &str) -> Result<(), ScenarioError> {
    let request = ApiRequest::get(path);
    let response = send(client, &request).await?;
    let request_label = label(&request);
    expect_status(&request_label, &response, 404)?;
    expect_empty_object(&request_label, &response)
}

/// `GET /unknown?per_page=1` lists cerulean first.
async fn unknown_resource_list(client: &ApiClient) -> Result<(), ScenarioError> {
    let request = ApiRequest::get("/unknown").with_query("per_page", 1_i64);
    let response = send(client, &request).await?;
    let request_label = label(&request);
    expect_status(&request_label, &response, 200)?;
    expect_str(&request_label, &response, "/data/0/name", fixtures::FIRST_COLOR_NAME)?;
    expect_str(&request_label, &response, "/data/0/pantone_value", fixtures::FIRST_COLOR_PANTONE)
}

/// `PUT /users/{id}` echoes the new name.
async fn update_user(client: &ApiClient) -> Result<(), ScenarioError> {
    let id = create_fixture_user(client, "Black", "cat").await?;
    let new_name = "White";
    let request =
        ApiRequest::put(format!("/users/{id}"), json!({ "name": new_name, "job": "cat" }));
    let response = send(client, &request).await?;
    let request_label = label(&request);
    expect_status(&request_label, &response, 200)?;
    expect_str(&request_label, &response, "/name", new_name)
}

/// `DELETE /users/{id}` returns 204.
async fn delete_user(client: &ApiClient) -> Result<(), ScenarioError> {
    let id = create_fixture_user(client, "ancient", "evil").await?;
    let request = ApiRequest::delete(format!("/users/{id}"));
    let response = send(client, &request).await?;
    expect_status(&label(&request), &response, 204)
}

/// `POST /register` for the predefined user.
async fn register_success(
    client: &ApiClient,
    registry: &SchemaRegistry,
) -> Result<(), ScenarioError> {
    let request =
        credentials("/register", fixtures::DEFINED_EMAIL, Some(fixtures::REGISTER_PASSWORD));
    let response = send(client, &request).await?;
    let request_label = label(&request);
    expect_status(&request_label, &response, 200)?;
    expect_schema(registry, ResponseSchema::SuccessReg, &response)?;
    expect_str(&request_label, &response, "/token", fixtures::FIXED_TOKEN)
}

/// `POST /login` for the predefined user.
async fn login_success(client: &ApiClient) -> Result<(), ScenarioError> {
    let request = credentials("/login", fixtures::DEFINED_EMAIL, Some(fixtures::LOGIN_PASSWORD));
    let response = send(client, &request).await?;
    let request_label = label(&request);
    expect_status(&request_label, &response, 200)?;
    expect_str(&request_label, &response, "/token", fixtures::FIXED_TOKEN)
}

/// Credential request the remote rejects with 400 and `error` text.
async fn rejected(
    client: &ApiClient,
    path: &str,
    email: &str,
    password: Option<&str>,
    expected_error: &str,
) -> Result<(), ScenarioError> {
    let request = credentials(path, email, password);
    let response = send(client, &request).await?;
    let request_label = label(&request);
    expect_status(&request_label, &response, 400)?;
    expect_str(&request_label, &response, "/error", expected_error)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Creates a user owned by the calling scenario and returns its id.
///
/// The create status is not asserted; only a usable id is required.
async fn create_fixture_user(
    client: &ApiClient,
    name: &str,
    job: &str,
) -> Result<String, ScenarioError> {
    let request = ApiRequest::post("/users", json!({ "name": name, "job": job }));
    let response = send(client, &request).await?;
    created_id(&label(&request), &response)
}

/// Builds a register/login body, omitting `password` when absent.
fn credentials(path: &str, email: &str, password: Option<&str>) -> ApiRequest {
    let body = password.map_or_else(
        || json!({ "email": email }),
        |password| json!({ "email": email, "password": password }),
    );
    ApiRequest::post(path, body)
}

/// Sends through the client, lifting transport errors.
async fn send(client: &ApiClient, request: &ApiRequest) -> Result<ApiResponse, ScenarioError> {
    Ok(client.send(request).await?)
}

/// Short request label used in failure messages.
fn label(request: &ApiRequest) -> String {
    format!("{} {}", request.method, request.path)
}
