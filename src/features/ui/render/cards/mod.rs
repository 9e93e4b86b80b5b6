mod projects;
mod services;

pub(in crate::features::ui) use projects::draw_project_column;
pub(in crate::features::ui) use services::draw_service_column;
