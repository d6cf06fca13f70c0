//! UseCase: メッセージ中継処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayMessageUseCase::execute() メソッド
//! - 受信フレームの分類（chat / object_move / その他）とブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - クライアントが送った user を信用せず、セッションのユーザー名で上書きする
//! - JSON でないフレームはエラーではなく chat として扱う
//!
//! ### どのような状況を想定しているか
//! - 正常系：chat / object_move / 未知の type
//! - フォールバック：プレーンテキスト
//! - なりすまし：user フィールド付きのフレーム

use std::sync::Arc;

use crate::{
    domain::{Event, RoomName, RoomRegistry, Timestamp, Username},
    infrastructure::dto::websocket::decode_frame,
};

use super::fanout::broadcast_event;

/// メッセージ中継のユースケース (Active ループの 1 ステップ)
pub struct RelayMessageUseCase {
    /// Registry（ルームとメンバーの対応表）
    registry: Arc<dyn RoomRegistry>,
}

impl RelayMessageUseCase {
    /// 新しい RelayMessageUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// 受信フレームを分類し、ルーム全員にブロードキャストする
    ///
    /// # Returns
    ///
    /// ブロードキャストしたイベント
    pub async fn execute(&self, room: &RoomName, sender: &Username, raw: &str) -> Event {
        let message = decode_frame(raw);
        let event = Event::from_client(sender, message, Timestamp::now());
        tracing::debug!(
            "Relaying '{}' from '{}' to room '{}'",
            event.kind(),
            sender,
            room
        );

        broadcast_event(self.registry.as_ref(), room, &event).await;
        event
    }
}
