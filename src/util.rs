/// 認証情報をマスキングしてログ出力用の文字列を生成
///
/// APIキー・アクセストークンの最初の4文字と最後の4文字のみを表示し、中間を***でマスキング
///
/// # Examples
/// ```
/// use livechat_poller::util::mask_credential;
///
/// let masked = mask_credential("AIzaSyABC123def456GHI789");
/// assert_eq!(masked, "AIza***I789");
/// ```
pub fn mask_credential(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let len = chars.len();
    if len <= 8 {
        // 短い値は全体をマスク
        return "***".to_string();
    }

    let prefix: String = chars.iter().take(4).collect();
    let suffix: String = chars.iter().skip(len - 4).collect();
    format!("{}***{}", prefix, suffix)
}
