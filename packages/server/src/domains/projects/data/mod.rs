pub mod project;

pub use project::{
    ProjectCategoryData, ProjectData, ProjectStatsData, ProjectStatusData, SubmitProjectInput,
    SubmitProjectResult,
};
