// system-tests/tests/helpers/datasets.rs
// ============================================================================
// Module: Dataset Fixtures
// Description: Tenant provisioning and teardown for dataset suites.
// Purpose: Start every test from a clean tenant with known fixture datasets.
// Dependencies: docmill-api
// ============================================================================

use docmill_api::CODE_SUCCESS;
use docmill_api::CreateDatasetRequest;
use docmill_api::Dataset;
use docmill_api::DatasetApiClient;
use docmill_api::DeleteDatasetsRequest;
use docmill_api::ListDatasetsQuery;

/// Fixture datasets provisioned for one test.
pub struct DatasetFixture {
    /// Ids of the provisioned datasets, in creation order.
    pub dataset_ids: Vec<String>,
}

impl DatasetFixture {
    /// Purges the tenant, then creates `count` datasets named `dataset_{i}`.
    ///
    /// The purge makes provisioning robust against leftovers from crashed
    /// prior runs.
    pub async fn provision(client: &DatasetApiClient, count: usize) -> Result<Self, String> {
        purge_tenant(client).await?;
        let mut dataset_ids = Vec::with_capacity(count);
        for index in 0 .. count {
            let request = CreateDatasetRequest::new(format!("dataset_{index}"));
            let envelope = client
                .create_dataset(&request)
                .await
                .map_err(|err| format!("create dataset_{index}: {err}"))?;
            if envelope.code != CODE_SUCCESS {
                return Err(format!(
                    "create dataset_{index} failed: code {} message {}",
                    envelope.code, envelope.message
                ));
            }
            let dataset = envelope
                .dataset()
                .map_err(|err| format!("decode created dataset_{index}: {err}"))?;
            dataset_ids.push(dataset.id);
        }
        Ok(Self {
            dataset_ids,
        })
    }

    /// Returns the id of the first fixture dataset, or an empty string when
    /// nothing was provisioned.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.dataset_ids.first().map_or("", String::as_str)
    }

    /// Deletes the fixture datasets unless `keep` asks to preserve them.
    pub async fn teardown(self, client: &DatasetApiClient, keep: bool) -> Result<(), String> {
        if keep {
            return Ok(());
        }
        let request = DeleteDatasetsRequest::by_ids(self.dataset_ids);
        let envelope = client
            .delete_datasets(&request)
            .await
            .map_err(|err| format!("delete fixtures: {err}"))?;
        if envelope.code != CODE_SUCCESS {
            return Err(format!(
                "delete fixtures failed: code {} message {}",
                envelope.code, envelope.message
            ));
        }
        Ok(())
    }
}

/// Deletes every dataset the test tenant owns.
pub async fn purge_tenant(client: &DatasetApiClient) -> Result<(), String> {
    let envelope = client
        .delete_datasets(&DeleteDatasetsRequest::all())
        .await
        .map_err(|err| format!("purge tenant: {err}"))?;
    if envelope.code != CODE_SUCCESS {
        return Err(format!(
            "purge tenant failed: code {} message {}",
            envelope.code, envelope.message
        ));
    }
    Ok(())
}

/// Fetches one dataset by id through the list endpoint.
pub async fn fetch_dataset(client: &DatasetApiClient, dataset_id: &str) -> Result<Dataset, String> {
    let query = ListDatasetsQuery::by_id(dataset_id);
    let envelope = client
        .list_datasets(&query)
        .await
        .map_err(|err| format!("list dataset {dataset_id}: {err}"))?;
    if envelope.code != CODE_SUCCESS {
        return Err(format!(
            "list dataset {dataset_id} failed: code {} message {}",
            envelope.code, envelope.message
        ));
    }
    let page = envelope.dataset_page().map_err(|err| err.to_string())?;
    page.into_iter()
        .find(|dataset| dataset.id == dataset_id)
        .ok_or_else(|| format!("dataset {dataset_id} not present in listing"))
}
