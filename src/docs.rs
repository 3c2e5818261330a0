use utoipa::OpenApi;

use edunav_models::{
    Breadcrumb, Class, CreateSessionDto, Institute, MenuEntry, NavigateDto, NavigationResponse,
    PermissionDecision, PermissionSummary, SelectEntityDto, Selection, SessionView, Subject,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::access::controller::get_role_permissions,
        crate::modules::access::controller::check_permission,
        crate::modules::sessions::controller::create_session,
        crate::modules::sessions::controller::get_session,
        crate::modules::sessions::controller::end_session,
        crate::modules::sessions::controller::navigate,
        crate::modules::sessions::controller::select,
        crate::modules::sessions::controller::clear_selection,
    ),
    components(
        schemas(
            PermissionSummary,
            PermissionDecision,
            CreateSessionDto,
            NavigateDto,
            NavigationResponse,
            SelectEntityDto,
            SessionView,
            Selection,
            Institute,
            Class,
            Subject,
            Breadcrumb,
            MenuEntry,
        )
    ),
    tags(
        (name = "Permissions", description = "Role permission lookups"),
        (name = "Sessions", description = "Console sessions, navigation and selection")
    ),
    info(
        title = "EduNav Console API",
        version = "0.1.0",
        description = "Role-aware navigation and Institute → Class → Subject selection for the EduNav admin console.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
