//! 测试用的内存存储

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::Storage;
use crate::errors::{MysteryShopperError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::{Assignment, AssignmentStatus},
        requests::AssignmentListQuery,
        responses::AssignmentPage,
    },
    client::requests::ClientAssignmentQuery,
    scoring::entities::{RecordedAnswer, ScoringModule, ScoringQuestion},
};

#[derive(Default)]
struct Inner {
    assignments: Vec<Assignment>,
    // form_id -> 模块（已按顺序）
    modules: HashMap<i64, Vec<ScoringModule>>,
    // module_id -> 问题（已按顺序）
    questions: HashMap<i64, Vec<ScoringQuestion>>,
    // (assignment_id, question_id) -> 得分
    answers: HashMap<(i64, i64), Option<i32>>,
    // 查询这些分配时返回数据库错误
    failing_assignments: HashSet<i64>,
    seeded: bool,
}

#[derive(Default)]
pub(crate) struct MemoryStorage {
    inner: Mutex<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_module(&self, form_id: i64, id: i64, title: &str, weight: f64) {
        let mut inner = self.inner.lock().unwrap();
        inner.modules.entry(form_id).or_default().push(ScoringModule {
            id,
            title: title.to_string(),
            weight,
        });
    }

    pub fn add_question(&self, module_id: i64, id: i64, max_points: i32) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .questions
            .entry(module_id)
            .or_default()
            .push(ScoringQuestion { id, max_points });
    }

    pub fn add_assignment(&self, id: i64, form_id: i64, status: AssignmentStatus) {
        self.add_client_assignment(id, form_id, status, None, id);
    }

    pub fn add_client_assignment(
        &self,
        id: i64,
        form_id: i64,
        status: AssignmentStatus,
        client_slug: Option<&str>,
        created_at: i64,
    ) {
        let created = DateTime::<Utc>::from_timestamp(created_at, 0).unwrap();
        let mut inner = self.inner.lock().unwrap();
        inner.assignments.push(Assignment {
            id,
            form_id,
            shopper_email: format!("shopper{id}@demo.com"),
            shopper_slug: format!("shopper-{id}"),
            client_slug: client_slug.map(str::to_string),
            status,
            created_at: created,
            updated_at: created,
        });
    }

    pub fn answer(&self, assignment_id: i64, question_id: i64, points: Option<i32>) {
        let mut inner = self.inner.lock().unwrap();
        inner.answers.insert((assignment_id, question_id), points);
    }

    pub fn fail_assignment(&self, assignment_id: i64) {
        let mut inner = self.inner.lock().unwrap();
        inner.failing_assignments.insert(assignment_id);
    }

    pub fn is_seeded(&self) -> bool {
        self.inner.lock().unwrap().seeded
    }

    fn sorted_newest_first(mut items: Vec<Assignment>) -> Vec<Assignment> {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        items
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        let inner = self.inner.lock().unwrap();
        if inner.failing_assignments.contains(&id) {
            return Err(MysteryShopperError::database_operation(format!(
                "查询分配失败: {id}"
            )));
        }
        Ok(inner.assignments.iter().find(|a| a.id == id).cloned())
    }

    async fn list_modules_by_form(&self, form_id: i64) -> Result<Vec<ScoringModule>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.modules.get(&form_id).cloned().unwrap_or_default())
    }

    async fn list_questions_by_module(&self, module_id: i64) -> Result<Vec<ScoringQuestion>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.questions.get(&module_id).cloned().unwrap_or_default())
    }

    async fn list_answers_for_questions(
        &self,
        assignment_id: i64,
        question_ids: &[i64],
    ) -> Result<Vec<RecordedAnswer>> {
        let inner = self.inner.lock().unwrap();
        Ok(question_ids
            .iter()
            .filter_map(|qid| {
                inner
                    .answers
                    .get(&(assignment_id, *qid))
                    .map(|points| RecordedAnswer {
                        question_id: *qid,
                        points_earned: *points,
                    })
            })
            .collect())
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentPage> {
        let inner = self.inner.lock().unwrap();
        let filtered: Vec<Assignment> = inner
            .assignments
            .iter()
            .filter(|a| query.status.is_none_or(|s| a.status == s))
            .filter(|a| query.form_id.is_none_or(|f| a.form_id == f))
            .cloned()
            .collect();
        let filtered = Self::sorted_newest_first(filtered);

        let size = query.size.max(1);
        let page = query.page.max(1);
        let total = filtered.len() as u64;
        let items = filtered
            .into_iter()
            .skip(((page - 1) * size) as usize)
            .take(size as usize)
            .collect();

        Ok(AssignmentPage {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: total.div_ceil(size) as i64,
            },
        })
    }

    async fn list_client_assignments(
        &self,
        query: ClientAssignmentQuery,
    ) -> Result<Vec<Assignment>> {
        let inner = self.inner.lock().unwrap();
        let filtered = inner
            .assignments
            .iter()
            .filter(|a| a.client_slug.as_deref() == Some(query.client_slug.as_str()))
            .filter(|a| query.status.is_none_or(|s| a.status == s))
            .filter(|a| {
                query
                    .created_from
                    .is_none_or(|from| a.created_at.timestamp() >= from)
            })
            .filter(|a| {
                query
                    .created_before
                    .is_none_or(|before| a.created_at.timestamp() < before)
            })
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(filtered))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn count_forms(&self) -> Result<u64> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.modules.len() as u64)
    }

    async fn seed_demo_data(&self) -> Result<()> {
        self.inner.lock().unwrap().seeded = true;
        Ok(())
    }
}
