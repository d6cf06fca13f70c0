//! UseCase: ルーム入室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - レジストリへの登録と入室イベントのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 入室イベントは登録と同時に送られ、入室した本人にも届く必要がある
//! - 入室イベントの送信者は必ず SYSTEM でなければならない
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規メンバーの入室
//! - 並行：他メンバーの発言が続く中での入室（本人には入室イベントが最初に届く）

use std::sync::Arc;

use crate::domain::{Event, Member, RoomName, RoomRegistry, Timestamp};

use super::fanout::encode_for_room;

/// ルーム入室のユースケース (Connecting → Active)
pub struct JoinRoomUseCase {
    /// Registry（ルームとメンバーの対応表）
    registry: Arc<dyn RoomRegistry>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// 入室を実行
    ///
    /// メンバーを登録し、同じロックの中で入室イベントをルーム全員（本人を含む）に送る。
    pub async fn execute(&self, room: &RoomName, member: Member) {
        let username = member.username.clone();
        let session_id = member.session_id;

        let event = Event::join(&username, room, Timestamp::now());
        let Some(frame) = encode_for_room(room, &event) else {
            return;
        };

        self.registry.join(room, member, &frame).await;
        tracing::info!(
            "Session {} ('{}') joined room '{}'",
            session_id,
            username,
            room
        );
    }
}
