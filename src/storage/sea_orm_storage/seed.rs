//! 演示数据写入
//!
//! 一份餐厅评估表单（三个模块、每个模块三道 10 分题）和一个草稿状态的分配。

use super::SeaOrmStorage;
use crate::entity::{assignments, forms, modules, questions};
use crate::errors::{MysteryShopperError, Result};
use crate::models::assignments::entities::AssignmentStatus;
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};
use tracing::info;

struct DemoModule {
    title: &'static str,
    description: &'static str,
    weight: f64,
    questions: [&'static str; 3],
}

const DEMO_FORM_NAME: &str = "Formulario Restaurante v1";
const DEMO_FORM_DESCRIPTION: &str = "Primera versión del formulario de evaluación";
const DEMO_QUESTION_MAX_POINTS: i32 = 10;

const DEMO_MODULES: [DemoModule; 3] = [
    DemoModule {
        title: "Baño",
        description: "Evaluación de instalaciones sanitarias",
        weight: 30.0,
        questions: [
            "¿El baño estaba limpio?",
            "¿Había papel higiénico disponible?",
            "¿Funcionaban correctamente las instalaciones?",
        ],
    },
    DemoModule {
        title: "Atención del personal",
        description: "Evaluación del servicio y atención al cliente",
        weight: 40.0,
        questions: [
            "¿El personal fue amable?",
            "¿El tiempo de espera fue razonable?",
            "¿El personal conocía el menú?",
        ],
    },
    DemoModule {
        title: "Calidad de la comida",
        description: "Evaluación de platos y bebidas",
        weight: 30.0,
        questions: [
            "¿La comida estaba bien preparada?",
            "¿La presentación era atractiva?",
            "¿La temperatura era adecuada?",
        ],
    },
];

const DEMO_SHOPPER_EMAIL: &str = "shopper@demo.com";
const DEMO_SHOPPER_SLUG: &str = "demo-shopper-slug";
const DEMO_CLIENT_SLUG: &str = "demo-cliente-slug";

impl SeaOrmStorage {
    /// 在一个事务内写入演示数据
    pub async fn seed_demo_data_impl(&self) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| MysteryShopperError::database_operation(format!("开启事务失败: {e}")))?;

        let form = forms::ActiveModel {
            name: Set(DEMO_FORM_NAME.to_string()),
            description: Set(Some(DEMO_FORM_DESCRIPTION.to_string())),
            version: Set(1),
            active: Set(true),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| MysteryShopperError::database_operation(format!("创建演示表单失败: {e}")))?;

        for (module_order, demo) in DEMO_MODULES.iter().enumerate() {
            let module = modules::ActiveModel {
                form_id: Set(form.id),
                title: Set(demo.title.to_string()),
                description: Set(Some(demo.description.to_string())),
                display_order: Set(module_order as i32 + 1),
                weight: Set(demo.weight),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| {
                MysteryShopperError::database_operation(format!("创建演示模块失败: {e}"))
            })?;

            for (question_order, statement) in demo.questions.iter().enumerate() {
                questions::ActiveModel {
                    module_id: Set(module.id),
                    statement: Set(statement.to_string()),
                    kind: Set("single_choice".to_string()),
                    display_order: Set(question_order as i32 + 1),
                    max_points: Set(DEMO_QUESTION_MAX_POINTS),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| {
                    MysteryShopperError::database_operation(format!("创建演示问题失败: {e}"))
                })?;
            }
        }

        assignments::ActiveModel {
            form_id: Set(form.id),
            shopper_email: Set(DEMO_SHOPPER_EMAIL.to_string()),
            shopper_slug: Set(DEMO_SHOPPER_SLUG.to_string()),
            client_slug: Set(Some(DEMO_CLIENT_SLUG.to_string())),
            status: Set(AssignmentStatus::Draft.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| MysteryShopperError::database_operation(format!("创建演示分配失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| MysteryShopperError::database_operation(format!("提交事务失败: {e}")))?;

        info!("演示数据写入完成，表单 ID: {}", form.id);
        Ok(())
    }
}
