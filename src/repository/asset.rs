use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::asset::{Asset, AssetUpdate, NewAsset};
use crate::domain::search::{AssetOrder, AssetPredicate, AssetSearch, fold_case};
use crate::domain::types::AssetId;
use crate::models::asset::{Asset as DbAsset, AssetChangeset, NewAsset as DbNewAsset};
use crate::repository::{AssetReader, AssetWriter, DieselRepository, RepositoryResult};
use crate::schema::{asset_relations, assets};

type BoxedAssets = assets::BoxedQuery<'static, Sqlite>;

/// `LIKE` pattern matching `text` anywhere, with wildcards escaped by `\`.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn apply_predicate(items: BoxedAssets, predicate: &AssetPredicate) -> BoxedAssets {
    match predicate {
        AssetPredicate::AssetTypeIn(ids) => {
            let ids: Vec<i32> = ids.iter().map(|id| id.get()).collect();
            items.filter(assets::asset_type_id.eq_any(ids))
        }
        // SQLite folds ASCII only, so match against the pre-folded columns.
        AssetPredicate::Text(text) => {
            let pattern = contains_pattern(&fold_case(text));
            items.filter(
                assets::search_name
                    .like(pattern.clone())
                    .escape('\\')
                    .or(assets::search_description.like(pattern).escape('\\')),
            )
        }
        AssetPredicate::Kind(kind) => items.filter(assets::kind.eq(kind.type_name())),
        AssetPredicate::CreatedFrom(start) => items.filter(assets::created_at.ge(*start)),
        AssetPredicate::CreatedUntil(end) => items.filter(assets::created_at.le(*end)),
    }
}

fn apply_order(items: BoxedAssets, order: AssetOrder) -> BoxedAssets {
    match order {
        AssetOrder::NameAsc => items.order((assets::name.asc(), assets::id.asc())),
        AssetOrder::NameDesc => items.order((assets::name.desc(), assets::id.desc())),
        AssetOrder::CreatedAtAsc => items.order((assets::created_at.asc(), assets::id.asc())),
        AssetOrder::CreatedAtDesc => items.order((assets::created_at.desc(), assets::id.desc())),
    }
}

impl AssetReader for DieselRepository {
    fn get_asset_by_id(&self, id: AssetId) -> RepositoryResult<Option<Asset>> {
        let mut conn = self.conn()?;

        let asset = assets::table
            .find(id.get())
            .first::<DbAsset>(&mut conn)
            .optional()?;

        Ok(asset.map(TryInto::try_into).transpose()?)
    }

    fn get_asset_by_name(&self, name: &str) -> RepositoryResult<Option<Asset>> {
        let mut conn = self.conn()?;

        let asset = assets::table
            .filter(assets::name.eq(name))
            .order(assets::id.asc())
            .first::<DbAsset>(&mut conn)
            .optional()?;

        Ok(asset.map(TryInto::try_into).transpose()?)
    }

    fn search_assets(&self, search: &AssetSearch) -> RepositoryResult<(usize, Vec<Asset>)> {
        let mut conn = self.conn()?;

        let query_builder = || {
            search
                .predicates
                .iter()
                .fold(assets::table.into_boxed::<Sqlite>(), apply_predicate)
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        // Caller options go on last so no predicate can override them.
        let mut items = apply_order(query_builder(), search.options.order);
        if let Some(pagination) = &search.options.pagination {
            items = items
                .offset(i64::try_from(pagination.offset()).unwrap_or(i64::MAX))
                .limit(i64::try_from(pagination.per_page).unwrap_or(i64::MAX));
        }

        let items = items
            .load::<DbAsset>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Asset>, _>>()?;

        Ok((total, items))
    }
}

impl AssetWriter for DieselRepository {
    fn create_asset(&self, asset: &NewAsset) -> RepositoryResult<Asset> {
        let mut conn = self.conn()?;

        let row = diesel::insert_into(assets::table)
            .values(DbNewAsset::from(asset))
            .get_result::<DbAsset>(&mut conn)?;

        Ok(row.try_into()?)
    }

    fn update_asset(&self, id: AssetId, update: &AssetUpdate) -> RepositoryResult<Asset> {
        let mut conn = self.conn()?;

        let changeset = AssetChangeset::new(update, Utc::now().naive_utc());
        let row = diesel::update(assets::table.find(id.get()))
            .set(changeset)
            .get_result::<DbAsset>(&mut conn)?;

        Ok(row.try_into()?)
    }

    fn delete_asset(&self, id: AssetId) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let affected = conn.transaction(|conn| {
            diesel::delete(asset_relations::table.filter(asset_relations::asset_id.eq(id.get())))
                .execute(conn)?;

            diesel::delete(assets::table.find(id.get())).execute(conn)
        })?;

        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_escapes_like_wildcards() {
        assert_eq!(contains_pattern("logo"), "%logo%");
        assert_eq!(contains_pattern("100%_"), "%100\\%\\_%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
