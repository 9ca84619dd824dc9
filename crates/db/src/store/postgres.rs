use async_trait::async_trait;
use ucsb_core::types::DbId;

use crate::models::help_request::{CreateHelpRequest, HelpRequest};
use crate::models::menu_item_review::{CreateMenuItemReview, MenuItemReview};
use crate::models::ucsb_dining_commons_menu_item::{
    CreateUcsbDiningCommonsMenuItem, UcsbDiningCommonsMenuItem,
};
use crate::models::ucsb_organization::{CreateUcsbOrganization, UcsbOrganization};
use crate::repositories::{
    HelpRequestRepo, MenuItemReviewRepo, UcsbDiningCommonsMenuItemRepo, UcsbOrganizationRepo,
};
use crate::store::EntityStore;
use crate::DbPool;

/// [`EntityStore`] for every entity, delegating to the table repositories.
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<HelpRequest> for PgStore {
    async fn find_all(&self) -> Result<Vec<HelpRequest>, sqlx::Error> {
        HelpRequestRepo::list(&self.pool).await
    }

    async fn find_by_key(&self, id: &DbId) -> Result<Option<HelpRequest>, sqlx::Error> {
        HelpRequestRepo::find_by_id(&self.pool, *id).await
    }

    async fn create(&self, draft: CreateHelpRequest) -> Result<HelpRequest, sqlx::Error> {
        HelpRequestRepo::create(&self.pool, &draft).await
    }

    async fn update(&self, record: &HelpRequest) -> Result<Option<HelpRequest>, sqlx::Error> {
        HelpRequestRepo::update(&self.pool, record).await
    }

    async fn delete(&self, id: &DbId) -> Result<bool, sqlx::Error> {
        HelpRequestRepo::delete(&self.pool, *id).await
    }
}

#[async_trait]
impl EntityStore<MenuItemReview> for PgStore {
    async fn find_all(&self) -> Result<Vec<MenuItemReview>, sqlx::Error> {
        MenuItemReviewRepo::list(&self.pool).await
    }

    async fn find_by_key(&self, id: &DbId) -> Result<Option<MenuItemReview>, sqlx::Error> {
        MenuItemReviewRepo::find_by_id(&self.pool, *id).await
    }

    async fn create(&self, draft: CreateMenuItemReview) -> Result<MenuItemReview, sqlx::Error> {
        MenuItemReviewRepo::create(&self.pool, &draft).await
    }

    async fn update(
        &self,
        record: &MenuItemReview,
    ) -> Result<Option<MenuItemReview>, sqlx::Error> {
        MenuItemReviewRepo::update(&self.pool, record).await
    }

    async fn delete(&self, id: &DbId) -> Result<bool, sqlx::Error> {
        MenuItemReviewRepo::delete(&self.pool, *id).await
    }
}

#[async_trait]
impl EntityStore<UcsbDiningCommonsMenuItem> for PgStore {
    async fn find_all(&self) -> Result<Vec<UcsbDiningCommonsMenuItem>, sqlx::Error> {
        UcsbDiningCommonsMenuItemRepo::list(&self.pool).await
    }

    async fn find_by_key(
        &self,
        id: &DbId,
    ) -> Result<Option<UcsbDiningCommonsMenuItem>, sqlx::Error> {
        UcsbDiningCommonsMenuItemRepo::find_by_id(&self.pool, *id).await
    }

    async fn create(
        &self,
        draft: CreateUcsbDiningCommonsMenuItem,
    ) -> Result<UcsbDiningCommonsMenuItem, sqlx::Error> {
        UcsbDiningCommonsMenuItemRepo::create(&self.pool, &draft).await
    }

    async fn update(
        &self,
        record: &UcsbDiningCommonsMenuItem,
    ) -> Result<Option<UcsbDiningCommonsMenuItem>, sqlx::Error> {
        UcsbDiningCommonsMenuItemRepo::update(&self.pool, record).await
    }

    async fn delete(&self, id: &DbId) -> Result<bool, sqlx::Error> {
        UcsbDiningCommonsMenuItemRepo::delete(&self.pool, *id).await
    }
}

#[async_trait]
impl EntityStore<UcsbOrganization> for PgStore {
    async fn find_all(&self) -> Result<Vec<UcsbOrganization>, sqlx::Error> {
        UcsbOrganizationRepo::list(&self.pool).await
    }

    async fn find_by_key(&self, org_code: &String) -> Result<Option<UcsbOrganization>, sqlx::Error> {
        UcsbOrganizationRepo::find_by_code(&self.pool, org_code).await
    }

    async fn create(
        &self,
        draft: CreateUcsbOrganization,
    ) -> Result<UcsbOrganization, sqlx::Error> {
        UcsbOrganizationRepo::create(&self.pool, &draft).await
    }

    async fn update(
        &self,
        record: &UcsbOrganization,
    ) -> Result<Option<UcsbOrganization>, sqlx::Error> {
        UcsbOrganizationRepo::update(&self.pool, record).await
    }

    async fn delete(&self, org_code: &String) -> Result<bool, sqlx::Error> {
        UcsbOrganizationRepo::delete(&self.pool, org_code).await
    }
}
