//! User-facing Text
//!
//! Alert, confirm, and label strings shown by the client.

pub const TITLE_REQUIRED: &str = "タイトルを入力してください";
pub const CONTENT_REQUIRED: &str = "内容を入力してください";

pub const POST_FAILED: &str = "投稿に失敗しました";
pub const UPDATE_FAILED: &str = "更新に失敗しました";
pub const DELETE_FAILED: &str = "削除に失敗しました";
pub const LOAD_FAILED: &str = "エントリーの読み込みに失敗しました";
pub const LOGOUT_FAILED: &str = "ログアウトに失敗しました";
pub const GENERIC_ERROR: &str = "エラーが発生しました";

pub const CONFIRM_DELETE: &str = "本当に削除しますか？";

pub const NO_ENTRIES: &str = "まだ日記がありません";
pub const WITHDRAWN_AUTHOR: &str = "退会済み";

/// Hint for item rows that will be dropped on save
pub fn incomplete_rows_hint(count: usize) -> String {
    format!("名前と内容の両方が入力されていない活動項目 {} 件は保存されません", count)
}
