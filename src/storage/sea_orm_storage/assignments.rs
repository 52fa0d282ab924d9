//! 分配存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{Column, Entity as Assignments};
use crate::errors::{MysteryShopperError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::Assignment, requests::AssignmentListQuery, responses::AssignmentPage,
    },
    client::requests::ClientAssignmentQuery,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 通过 ID 获取分配
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MysteryShopperError::database_operation(format!("查询分配失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出分配
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentPage> {
        let page = query.page.max(1);
        let size = query.size.max(1);

        let mut select = Assignments::find();

        // 状态筛选
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        // 表单筛选
        if let Some(form_id) = query.form_id {
            select = select.filter(Column::FormId.eq(form_id));
        }

        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            MysteryShopperError::database_operation(format!("查询分配总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            MysteryShopperError::database_operation(format!("查询分配页数失败: {e}"))
        })?;

        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| MysteryShopperError::database_operation(format!("查询分配列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_assignment())
            .collect();

        Ok(AssignmentPage {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出客户的分配
    pub async fn list_client_assignments_impl(
        &self,
        query: ClientAssignmentQuery,
    ) -> Result<Vec<Assignment>> {
        let mut select = Assignments::find().filter(Column::ClientSlug.eq(query.client_slug));

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        // 创建时间区间 [from, before)
        if let Some(from) = query.created_from {
            select = select.filter(Column::CreatedAt.gte(from));
        }
        if let Some(before) = query.created_before {
            select = select.filter(Column::CreatedAt.lt(before));
        }

        let items = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                MysteryShopperError::database_operation(format!("查询客户分配列表失败: {e}"))
            })?;

        Ok(items.into_iter().map(|m| m.into_assignment()).collect())
    }
}
