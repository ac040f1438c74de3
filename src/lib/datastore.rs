use super::error::ExportError;
use super::items::RawResource;
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
struct FindResponse {
    docs: Vec<Document>,
}

#[derive(Deserialize)]
struct Document {
    resource: RawResource,
}

/// Fetches all resources of the project that carry a geometry.
///
/// With an operation id, the result is narrowed to the operation
/// document itself and the resources recorded in it.
pub fn fetch_resources(
    server_url: &str,
    project: &str,
    operation: Option<&str>,
) -> Result<Vec<RawResource>, ExportError> {
    let query = json!({ "selector": selector(operation) });
    let url = format!("{}/{}/_find", server_url, project);
    debug!("querying {}", url);

    let response: FindResponse = Client::new()
        .post(&url)
        .json(&query)
        .send()?
        .error_for_status()?
        .json()?;

    debug!("datastore returned {} document(s)", response.docs.len());
    Ok(response.docs.into_iter().map(|doc| doc.resource).collect())
}

fn selector(operation: Option<&str>) -> Value {
    let mut selector = json!({ "resource.geometry": { "$gt": null } });
    if let Some(operation_id) = operation {
        selector["$or"] = json!([
            { "resource.id": operation_id },
            { "resource.relations.isRecordedIn": { "$elemMatch": { "$eq": operation_id } } },
        ]);
    }
    selector
}
