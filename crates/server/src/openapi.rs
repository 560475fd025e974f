use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct MessageDoc {
    pub message: String,
    /// Present on create only.
    pub id: Option<i32>,
}

#[derive(ToSchema)]
pub struct ContactDoc {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
    /// `YYYY-MM-DD`, stored verbatim.
    pub birth_date: Option<String>,
    pub group: String,
    pub phones: Vec<String>,
}

#[derive(ToSchema)]
pub struct ContactInputDoc {
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<String>,
    /// Defaults to `default`.
    pub group: Option<String>,
    pub phones: Vec<String>,
}

#[derive(ToSchema)]
pub struct UpcomingBirthdayDoc {
    pub id: i32,
    pub name: String,
    pub birth_date: String,
    pub phones: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::contacts::list_contacts,
        crate::routes::contacts::get_contact,
        crate::routes::contacts::create_contact,
        crate::routes::contacts::update_contact,
        crate::routes::contacts::delete_contact,
        crate::routes::contacts::list_groups,
        crate::routes::contacts::list_birthdays,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            MessageDoc,
            ContactDoc,
            ContactInputDoc,
            UpcomingBirthdayDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "contacts")
    )
)]
pub struct ApiDoc;
