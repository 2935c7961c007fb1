use crate::domain::model::Method;

/// 方法名稱在排除清單中（不分大小寫）時回傳 true
pub fn exclude_method(method: &Method, excludes: &[String]) -> bool {
    excludes
        .iter()
        .any(|exclude| method.name.eq_ignore_ascii_case(exclude))
}
