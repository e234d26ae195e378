use utoipa::OpenApi;

use rosterforge_export::ExportFormat;
use rosterforge_models::{
    CreateGroupDto, CreateStudentDto, Group, RenameGroupDto, Roster, Student, UpdateStudentDto,
};

use crate::modules::exports::controller::SavedExportResponse;
use crate::modules::roster::controller::{ErrorResponse, SelectionDto, SelectionResponse};
use crate::modules::submission::controller::SubmissionResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::roster::controller::get_roster,
        crate::modules::roster::controller::clear_roster,
        crate::modules::roster::controller::get_selection,
        crate::modules::roster::controller::set_selection,
        crate::modules::groups::controller::create_group,
        crate::modules::groups::controller::get_groups,
        crate::modules::groups::controller::rename_group,
        crate::modules::groups::controller::delete_group,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::exports::controller::get_export,
        crate::modules::exports::controller::save_export,
        crate::modules::submission::controller::submit_roster,
    ),
    components(
        schemas(
            Roster,
            Group,
            Student,
            CreateGroupDto,
            RenameGroupDto,
            CreateStudentDto,
            UpdateStudentDto,
            ExportFormat,
            SelectionDto,
            SelectionResponse,
            SavedExportResponse,
            SubmissionResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Roster", description = "Roster snapshot and selection cursor"),
        (name = "Groups", description = "Group management"),
        (name = "Students", description = "Student management"),
        (name = "Exports", description = "Format encoders and file export"),
        (name = "Submission", description = "Companion service delivery")
    )
)]
pub struct ApiDoc;
