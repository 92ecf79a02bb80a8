// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库，支持中文（默认）和英文
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en"）；不支持的语言保持当前设置
///
/// # 返回
/// 是否切换成功
pub fn set_locale(locale: &str) -> bool {
    match SUPPORTED_LOCALES
        .iter()
        .find(|l| l.eq_ignore_ascii_case(locale.trim()))
    {
        Some(supported) => {
            rust_i18n::set_locale(supported);
            true
        }
        None => {
            tracing::warn!(locale, "不支持的语言，保持当前设置");
            false
        }
    }
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use degree_planner::i18n::t;
/// let msg = t("category.free_electives");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数，占位符形如 %{name}）
///
/// # 示例
/// ```no_run
/// use degree_planner::i18n::t_with_args;
/// let msg = t_with_args("validation.missing_prerequisites", &[("codes", "CS 101")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
