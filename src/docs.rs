use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use cruxlog_core::pagination::{PaginationMeta, PaginationParams};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, MessageResponse, RefreshRequest, RegisterRequestDto, TokenResponse,
};
use crate::modules::exercises::model::{
    CreateExerciseDto, Exercise, ExerciseType, UpdateExerciseDto,
};
use crate::modules::goals::model::{
    CreateGoalCategoryDto, GoalCategory, GoalCategoryWithProgress, GoalProgress,
    UpdateGoalCategoryDto,
};
use crate::modules::programs::model::{CreateProgramDto, Program, UpdateProgramDto};
use crate::modules::routes::model::{CreateRouteDto, Route, RouteType, UpdateRouteDto};
use crate::modules::running::model::{
    CreateRunningSessionDto, RunningSession, UpdateRunningSessionDto,
};
use crate::modules::sessions::model::{
    ActivityType, ClimbingStyle, CreatePlanningDto, CreateSessionTemplateDto,
    CreateTrainingSessionDto, Planning, SessionTemplate, SessionType, TimeSlot, TrainingSession,
    UpdatePlanningDto,
};
use crate::modules::stats::model::{
    BestPerformances, BestRouteEntry, BestRunEntry, DashboardStats, GoalProgressEntry,
    GradeProgression, GradeProgressionEntry, MonthlyVolume,
};
use crate::modules::users::model::{
    ChangePasswordDto, PaginatedUsersResponse, UpdateConfigDto, UpdateProfileDto, User,
    UserConfig, UserRole,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::refresh,
        crate::modules::auth::controller::me,
        crate::modules::auth::controller::logout,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::update_profile,
        crate::modules::users::controller::change_password,
        crate::modules::users::controller::get_config,
        crate::modules::users::controller::update_config,
        crate::modules::users::controller::delete_account,
        crate::modules::users::controller::list_users,
        crate::modules::users::controller::delete_user,
        crate::modules::exercises::controller::list_exercises,
        crate::modules::exercises::controller::get_exercise,
        crate::modules::exercises::controller::create_exercise,
        crate::modules::exercises::controller::update_exercise,
        crate::modules::exercises::controller::delete_exercise,
        crate::modules::sessions::controller::list_templates,
        crate::modules::sessions::controller::create_template,
        crate::modules::sessions::controller::delete_template,
        crate::modules::sessions::controller::list_planning,
        crate::modules::sessions::controller::create_planning,
        crate::modules::sessions::controller::update_planning,
        crate::modules::sessions::controller::delete_planning,
        crate::modules::sessions::controller::list_training,
        crate::modules::sessions::controller::create_training,
        crate::modules::sessions::controller::delete_training,
        crate::modules::routes::controller::list_routes,
        crate::modules::routes::controller::get_route,
        crate::modules::routes::controller::create_route,
        crate::modules::routes::controller::update_route,
        crate::modules::routes::controller::delete_route,
        crate::modules::goals::controller::list_goal_categories,
        crate::modules::goals::controller::get_goal_category,
        crate::modules::goals::controller::create_goal_category,
        crate::modules::goals::controller::update_goal_category,
        crate::modules::goals::controller::delete_goal_category,
        crate::modules::running::controller::list_running_sessions,
        crate::modules::running::controller::get_running_session,
        crate::modules::running::controller::create_running_session,
        crate::modules::running::controller::update_running_session,
        crate::modules::running::controller::delete_running_session,
        crate::modules::programs::controller::list_programs,
        crate::modules::programs::controller::get_program,
        crate::modules::programs::controller::create_program,
        crate::modules::programs::controller::update_program,
        crate::modules::programs::controller::delete_program,
        crate::modules::programs::controller::activate_program,
        crate::modules::stats::controller::get_dashboard_stats,
        crate::modules::stats::controller::get_monthly_volume,
        crate::modules::stats::controller::get_grade_progression,
        crate::modules::stats::controller::get_best_performances,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            RegisterRequestDto,
            LoginRequest,
            RefreshRequest,
            TokenResponse,
            User,
            UserRole,
            UserConfig,
            UpdateProfileDto,
            ChangePasswordDto,
            UpdateConfigDto,
            PaginatedUsersResponse,
            PaginationMeta,
            PaginationParams,
            Exercise,
            ExerciseType,
            CreateExerciseDto,
            UpdateExerciseDto,
            SessionTemplate,
            SessionType,
            CreateSessionTemplateDto,
            Planning,
            ActivityType,
            TimeSlot,
            CreatePlanningDto,
            UpdatePlanningDto,
            TrainingSession,
            ClimbingStyle,
            CreateTrainingSessionDto,
            Route,
            RouteType,
            CreateRouteDto,
            UpdateRouteDto,
            GoalCategory,
            GoalProgress,
            GoalCategoryWithProgress,
            CreateGoalCategoryDto,
            UpdateGoalCategoryDto,
            RunningSession,
            CreateRunningSessionDto,
            UpdateRunningSessionDto,
            Program,
            CreateProgramDto,
            UpdateProgramDto,
            DashboardStats,
            GoalProgressEntry,
            MonthlyVolume,
            GradeProgression,
            GradeProgressionEntry,
            BestPerformances,
            BestRouteEntry,
            BestRunEntry,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and token refresh"),
        (name = "Users", description = "Profile, configuration, and account management"),
        (name = "Exercises", description = "Personal exercise library"),
        (name = "Sessions", description = "Session templates, planning, and training history"),
        (name = "Routes", description = "Long multi-pitch routes"),
        (name = "Goals", description = "Goal categories and progress"),
        (name = "Running", description = "Running sessions"),
        (name = "Programs", description = "Training programs"),
        (name = "Stats", description = "Dashboard and aggregate statistics")
    ),
    info(
        title = "Cruxlog API",
        version = "0.1.0",
        description = "Training-log REST API for climbing and running, with JWT-based authentication.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
