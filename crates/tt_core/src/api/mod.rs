pub mod json_api;

pub use json_api::{
    compute_view_json, compute_view_json_for, dashboard_options_json, ChartPayload,
    DashboardOptions, OptionEntry, ViewRequest, ViewResponse, EMPTY_RESULT_MESSAGE,
    SCHEMA_VERSION,
};
