use chrono::Utc;

use crate::domain::asset::{Asset, AssetUpdate, NewAsset};
use crate::domain::classification::Classifier;
use crate::domain::errors::ConfigurationError;
use crate::domain::search::{AssetFilters, AssetSearch, SearchOptions};
use crate::domain::types::AssetId;
use crate::domain::visibility::VisibilityRegistry;
use crate::forms::assets::AddAssetFormPayload;
use crate::forms::search::AssetSearchForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{
    AssetLookup, AssetReader, AssetTypeReader, AssetWriter, RepositoryError, resolve_asset,
};

use super::hooks::{AssetUpdateHook, SearchHook, SearchOutcome};
use super::{ServiceError, ServiceResult};

/// Resolves an id, a name or an asset record to an asset.
///
/// `Ok(None)` means nothing matched; only repository failures are errors.
pub fn find_asset<R>(lookup: impl Into<AssetLookup>, repo: &R) -> ServiceResult<Option<Asset>>
where
    R: AssetReader,
{
    resolve_asset(repo, lookup).map_err(|e| {
        log::error!("Failed to look up asset: {e}");
        ServiceError::Internal
    })
}

/// Runs a filtered search inside `hook`.
///
/// Filters are composed into predicates and executed with `options` applied
/// last. An unregistered visibility label aborts with a configuration error.
pub fn filtered_search<R, H>(
    filters: &AssetFilters,
    options: SearchOptions,
    repo: &R,
    visibilities: &VisibilityRegistry,
    hook: &H,
) -> SearchOutcome
where
    R: AssetReader,
    H: SearchHook + ?Sized,
{
    hook.around_search(filters, &mut || {
        let search = AssetSearch::compose(filters, options.clone(), visibilities).map_err(|e| {
            log::error!("Failed to compose asset search: {e}");
            ServiceError::from(e)
        })?;

        repo.search_assets(&search).map_err(|e| {
            log::error!("Failed to search assets: {e}");
            ServiceError::Internal
        })
    })
}

/// Validates raw search parameters and returns one page of matches, newest
/// first. Invalid input is rejected before the repository is touched.
pub fn search_assets<R, H>(
    form: AssetSearchForm,
    page: usize,
    repo: &R,
    visibilities: &VisibilityRegistry,
    hook: &H,
) -> ServiceResult<Paginated<Asset>>
where
    R: AssetReader,
    H: SearchHook + ?Sized,
{
    let filters = AssetFilters::try_from(form).map_err(|e| {
        log::warn!("Rejected asset search: {e}");
        ServiceError::from(e)
    })?;

    let options = SearchOptions::default().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    let (total, assets) = filtered_search(&filters, options, repo, visibilities, hook)?;

    Ok(Paginated::new(
        assets,
        page,
        total.div_ceil(DEFAULT_ITEMS_PER_PAGE),
    ))
}

/// Creates an asset, classifying its file and resolving its kind.
///
/// When the attached file has errors no category is assigned and the asset is
/// rejected as invalid without touching the repository.
pub fn create_asset<R>(
    payload: AddAssetFormPayload,
    repo: &R,
    classifier: &Classifier,
    visibilities: &VisibilityRegistry,
) -> ServiceResult<Asset>
where
    R: AssetWriter + AssetTypeReader,
{
    let kind = visibilities.resolve(&payload.visibility).map_err(|e| {
        log::error!("Failed to resolve asset kind: {e}");
        ServiceError::from(e)
    })?;

    let Some(key) = classifier.assign(&payload.resource) else {
        let errors = payload.resource.errors().join(", ");
        log::warn!("Asset `{}` left unclassified: {errors}", payload.name);
        return Err(ServiceError::Form(format!(
            "asset type can't be blank ({errors})"
        )));
    };

    let asset_type = match repo.get_asset_type_by_key(key) {
        Ok(Some(asset_type)) => asset_type,
        Ok(None) => {
            let err = ConfigurationError::UnknownCategoryKey(key.to_string());
            log::error!("Failed to assign category: {err}");
            return Err(err.into());
        }
        Err(e) => {
            log::error!("Failed to get asset type: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let now = Utc::now().naive_utc();
    let new_asset = NewAsset {
        name: payload.name,
        description: payload.description,
        asset_type_id: asset_type.id,
        kind,
        resource: payload.resource,
        created_at: now,
        updated_at: now,
    };

    repo.create_asset(&new_asset).map_err(|e| {
        log::error!("Failed to create asset: {e}");
        ServiceError::Internal
    })
}

/// Applies `update` and notifies `hook` once the change is stored.
pub fn update_asset<R, H>(
    asset_id: i32,
    update: AssetUpdate,
    repo: &R,
    hook: &H,
) -> ServiceResult<Asset>
where
    R: AssetWriter,
    H: AssetUpdateHook + ?Sized,
{
    let asset_id = AssetId::new(asset_id).map_err(|_| ServiceError::NotFound)?;

    let asset = match repo.update_asset(asset_id, &update) {
        Ok(asset) => asset,
        Err(RepositoryError::NotFound) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update asset: {e}");
            return Err(ServiceError::Internal);
        }
    };

    hook.after_update(&asset);
    Ok(asset)
}

/// Deletes an asset and every relation pointing at it.
pub fn destroy_asset<R>(asset_id: i32, repo: &R) -> ServiceResult<bool>
where
    R: AssetWriter,
{
    let asset_id = AssetId::new(asset_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_asset(asset_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to delete asset: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::asset::AttachedFile;
    use crate::domain::classification::CategoryRuleTable;
    use crate::domain::types::{
        AssetDescription, AssetKind, AssetName, AssetTypeId, VisibilityLabel,
    };
    use crate::repository::test::{TestRepository, sample_asset, standard_asset_types};
    use crate::services::hooks::PassthroughSearchHook;

    fn classifier() -> Classifier {
        Classifier::new(CategoryRuleTable::standard().unwrap())
    }

    fn registry() -> VisibilityRegistry {
        VisibilityRegistry::standard().unwrap()
    }

    fn payload(content_type: &str, size: i64) -> AddAssetFormPayload {
        AddAssetFormPayload {
            name: AssetName::new("Logo").unwrap(),
            description: None,
            visibility: VisibilityLabel::new("public").unwrap(),
            resource: AttachedFile::new("logo.bin", content_type, size),
        }
    }

    fn dated(id: i32, name: &str, description: Option<&str>, day: u32) -> Asset {
        let created_at = NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Asset {
            description: description.map(|d| AssetDescription::new(d).unwrap()),
            created_at,
            updated_at: created_at,
            ..sample_asset(id, name)
        }
    }

    #[derive(Default)]
    struct CountingHook {
        searches: Cell<usize>,
        updates: Cell<usize>,
    }

    impl SearchHook for CountingHook {
        fn around_search(
            &self,
            _filters: &AssetFilters,
            proceed: &mut dyn FnMut() -> SearchOutcome,
        ) -> SearchOutcome {
            self.searches.set(self.searches.get() + 1);
            proceed()
        }
    }

    impl AssetUpdateHook for CountingHook {
        fn after_update(&self, _asset: &Asset) {
            self.updates.set(self.updates.get() + 1);
        }
    }

    struct VetoHook;

    impl SearchHook for VetoHook {
        fn around_search(
            &self,
            _filters: &AssetFilters,
            _proceed: &mut dyn FnMut() -> SearchOutcome,
        ) -> SearchOutcome {
            Ok((0, Vec::new()))
        }
    }

    #[test]
    fn create_assigns_category_from_content_type() {
        let repo = TestRepository::default().with_asset_types(standard_asset_types());

        let asset = create_asset(payload("image/png", 10), &repo, &classifier(), &registry())
            .unwrap();
        assert_eq!(asset.asset_type_id, AssetTypeId::new(1).unwrap());
        assert_eq!(asset.kind, AssetKind::Public);

        let pdf = create_asset(
            payload("application/pdf", 10),
            &repo,
            &classifier(),
            &registry(),
        )
        .unwrap();
        assert_eq!(pdf.asset_type_id, AssetTypeId::new(3).unwrap());
    }

    #[test]
    fn create_falls_back_to_other() {
        let repo = TestRepository::default().with_asset_types(standard_asset_types());

        let asset = create_asset(
            payload("application/zip", 10),
            &repo,
            &classifier(),
            &registry(),
        )
        .unwrap();
        assert_eq!(asset.asset_type_id, AssetTypeId::new(6).unwrap());
    }

    #[test]
    fn create_rejects_broken_files_without_persisting() {
        let repo = TestRepository::default().with_asset_types(standard_asset_types());

        let err =
            create_asset(payload("image/png", 0), &repo, &classifier(), &registry()).unwrap_err();
        assert!(matches!(err, ServiceError::Form(_)));
        assert!(repo.assets().is_empty());
    }

    #[test]
    fn create_requires_category_rows() {
        let repo = TestRepository::default();

        let err = create_asset(payload("image/png", 10), &repo, &classifier(), &registry())
            .unwrap_err();
        assert!(matches!(err, ServiceError::Configuration(_)));
    }

    #[test]
    fn create_rejects_unregistered_visibility() {
        let repo = TestRepository::default().with_asset_types(standard_asset_types());
        let mut secret = payload("image/png", 10);
        secret.visibility = VisibilityLabel::new("secret").unwrap();

        let err = create_asset(secret, &repo, &classifier(), &registry()).unwrap_err();
        assert!(matches!(err, ServiceError::Configuration(_)));
        assert!(repo.assets().is_empty());
    }

    #[test]
    fn search_runs_inside_the_hook() {
        let repo = TestRepository::default().with_assets(vec![
            dated(1, "Logo", None, 1),
            dated(2, "Banner", Some("LOGO variant"), 2),
            dated(3, "Jingle", None, 3),
        ]);
        let hook = CountingHook::default();
        let filters = AssetFilters::default().text("logo");

        let (total, assets) =
            filtered_search(&filters, SearchOptions::default(), &repo, &registry(), &hook).unwrap();
        assert_eq!(hook.searches.get(), 1);
        assert_eq!(total, 2);
        let ids: Vec<i32> = assets.iter().map(|a| a.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn hook_can_veto_the_search() {
        let repo = TestRepository::default().with_assets(vec![dated(1, "Logo", None, 1)]);

        let (total, assets) = filtered_search(
            &AssetFilters::default(),
            SearchOptions::default(),
            &repo,
            &registry(),
            &VetoHook,
        )
        .unwrap();
        assert_eq!(total, 0);
        assert!(assets.is_empty());
    }

    #[test]
    fn search_with_unregistered_visibility_is_a_configuration_error() {
        let repo = TestRepository::default();
        let filters =
            AssetFilters::default().visibility(VisibilityLabel::new("secret").unwrap());

        let err = filtered_search(
            &filters,
            SearchOptions::default(),
            &repo,
            &registry(),
            &PassthroughSearchHook,
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::Configuration(_)));
    }

    #[test]
    fn invalid_search_form_never_reaches_the_hook() {
        let repo = TestRepository::default();
        let hook = CountingHook::default();
        let form = AssetSearchForm {
            asset_types: Some("1,x".to_string()),
            ..Default::default()
        };

        let err = search_assets(form, 1, &repo, &registry(), &hook).unwrap_err();
        assert!(matches!(err, ServiceError::Form(_)));
        assert_eq!(hook.searches.get(), 0);
    }

    #[test]
    fn search_form_paginates_results() {
        let assets = (1..=25)
            .map(|id| dated(id, &format!("asset {id}"), None, 1))
            .collect();
        let repo = TestRepository::default().with_assets(assets);

        let page = search_assets(
            AssetSearchForm::default(),
            2,
            &repo,
            &registry(),
            &PassthroughSearchHook,
        )
        .unwrap();
        assert_eq!(page.pages, 2);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn search_form_past_the_last_page_is_empty() {
        let repo = TestRepository::default().with_assets(vec![sample_asset(1, "logo")]);

        let page = search_assets(
            AssetSearchForm::default(),
            usize::MAX,
            &repo,
            &registry(),
            &PassthroughSearchHook,
        )
        .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.page, usize::MAX);
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn update_notifies_hook_once() {
        let repo = TestRepository::default().with_assets(vec![sample_asset(1, "logo")]);
        let hook = CountingHook::default();
        let update = AssetUpdate {
            name: Some(AssetName::new("brand logo").unwrap()),
            description: None,
        };

        let asset = update_asset(1, update, &repo, &hook).unwrap();
        assert_eq!(asset.name.as_str(), "brand logo");
        assert_eq!(hook.updates.get(), 1);
    }

    #[test]
    fn failed_update_does_not_notify() {
        let repo = TestRepository::default();
        let hook = CountingHook::default();

        let err = update_asset(42, AssetUpdate::default(), &repo, &hook).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
        assert_eq!(hook.updates.get(), 0);
    }

    #[test]
    fn find_accepts_ids_names_and_records() {
        let asset = sample_asset(4, "logo");
        let repo = TestRepository::default().with_assets(vec![asset.clone()]);

        assert_eq!(find_asset(4, &repo).unwrap(), Some(asset.clone()));
        assert_eq!(find_asset("logo", &repo).unwrap(), Some(asset.clone()));
        assert_eq!(find_asset(asset.clone(), &repo).unwrap(), Some(asset));
        assert_eq!(find_asset("missing", &repo).unwrap(), None);
    }

    #[test]
    fn destroy_reports_missing_assets() {
        let repo = TestRepository::default().with_assets(vec![sample_asset(1, "logo")]);

        assert!(destroy_asset(1, &repo).unwrap());
        assert_eq!(destroy_asset(1, &repo).unwrap_err(), ServiceError::NotFound);
    }
}
