//! # 従業員エンティティ

use crate::entity::Entity;

/// 従業員
///
/// `date_hired` は入社日の文字列表現。日付としての妥当性検証は行わない。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Employee {
    pub id:         String,
    pub name:       String,
    pub role:       String,
    pub email:      String,
    pub phone:      String,
    pub date_hired: String,
}

impl Entity for Employee {
    const NAME: &'static str = "Employee";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}
