//! メッセージの振り分け
//!
//! 役割ごとに1メソッドのトレイトを定義し、同じシグネチャのクロージャも
//! そのまま渡せるようにしている。

use super::errors::HandlerError;
use super::message::{ChatMessage, MessageKind};
use crate::superchat::SuperChatTier;

/// ハンドラーの戻り値
pub type HandlerResult = Result<(), HandlerError>;

/// 1メッセージを受け取るハンドラー（ポーリングループが直接呼ぶ）
pub trait MessageHandler: Send + Sync {
    fn handle_message(&self, message: &ChatMessage) -> HandlerResult;
}

/// 通常メッセージ（本文のみ）
pub trait SimpleMessageHandler: Send + Sync {
    fn handle_simple(&self, message_text: &str) -> HandlerResult;
}

/// メンバーのメッセージ
pub trait MemberMessageHandler: Send + Sync {
    fn handle_member(&self, user_name: &str, message_text: &str) -> HandlerResult;
}

/// スパチャ
pub trait SuperChatHandler: Send + Sync {
    fn handle_super_chat(
        &self,
        tier: SuperChatTier,
        user_name: &str,
        message_text: &str,
    ) -> HandlerResult;
}

/// 実効ポーリング間隔の観測者
///
/// ループの制御には影響しない。ループを止めないよう軽い処理に留めること
pub trait IntervalObserver: Send + Sync {
    fn observe_interval(&self, polling_interval_millis: u64);
}

impl<F> MessageHandler for F
where
    F: Fn(&ChatMessage) -> HandlerResult + Send + Sync,
{
    fn handle_message(&self, message: &ChatMessage) -> HandlerResult {
        self(message)
    }
}

impl<F> SimpleMessageHandler for F
where
    F: Fn(&str) -> HandlerResult + Send + Sync,
{
    fn handle_simple(&self, message_text: &str) -> HandlerResult {
        self(message_text)
    }
}

impl<F> MemberMessageHandler for F
where
    F: Fn(&str, &str) -> HandlerResult + Send + Sync,
{
    fn handle_member(&self, user_name: &str, message_text: &str) -> HandlerResult {
        self(user_name, message_text)
    }
}

impl<F> SuperChatHandler for F
where
    F: Fn(SuperChatTier, &str, &str) -> HandlerResult + Send + Sync,
{
    fn handle_super_chat(
        &self,
        tier: SuperChatTier,
        user_name: &str,
        message_text: &str,
    ) -> HandlerResult {
        self(tier, user_name, message_text)
    }
}

impl<F> IntervalObserver for F
where
    F: Fn(u64) + Send + Sync,
{
    fn observe_interval(&self, polling_interval_millis: u64) {
        self(polling_interval_millis)
    }
}

/// 分類結果に応じて各ハンドラーへ振り分ける `MessageHandler`
///
/// メンバー・スパチャ用ハンドラーが無い場合は通常メッセージ用ハンドラーへ回す。
/// スパチャの場合は表示用文字列ではなく投稿者のコメントを渡す。
/// ハンドラーのエラーはそのまま呼び出し元へ返す
pub struct MessageDispatcher {
    simple: Box<dyn SimpleMessageHandler>,
    member: Option<Box<dyn MemberMessageHandler>>,
    super_chat: Option<Box<dyn SuperChatHandler>>,
}

impl MessageDispatcher {
    pub fn new<S>(simple: S) -> Self
    where
        S: SimpleMessageHandler + 'static,
    {
        Self {
            simple: Box::new(simple),
            member: None,
            super_chat: None,
        }
    }

    pub fn with_member<M>(mut self, member: M) -> Self
    where
        M: MemberMessageHandler + 'static,
    {
        self.member = Some(Box::new(member));
        self
    }

    pub fn with_super_chat<C>(mut self, super_chat: C) -> Self
    where
        C: SuperChatHandler + 'static,
    {
        self.super_chat = Some(Box::new(super_chat));
        self
    }
}

impl MessageHandler for MessageDispatcher {
    fn handle_message(&self, message: &ChatMessage) -> HandlerResult {
        match &message.message_kind {
            MessageKind::SuperChat { tier, comment, .. } => match &self.super_chat {
                Some(handler) => handler.handle_super_chat(*tier, &message.author_name, comment),
                None => self.simple.handle_simple(comment),
            },
            MessageKind::Member => match &self.member {
                Some(handler) => handler.handle_member(&message.author_name, &message.message),
                None => self.simple.handle_simple(&message.message),
            },
            MessageKind::Text => self.simple.handle_simple(&message.message),
        }
    }
}
