//! UseCase: ルーム退室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LeaveRoomUseCase::execute() メソッド
//! - レジストリからの削除と、残ったメンバーへの退室イベント
//!
//! ### なぜこのテストが必要か
//! - 退室イベントは本人を除いた残りのメンバーにだけ届く
//! - 登録されていないセッションの後始末はエラーにならない
//!
//! ### どのような状況を想定しているか
//! - 正常系：メンバーの退室と通知
//! - エッジケース：最後のメンバーの退室（ルームが消える）
//! - 異常系：登録前に切断されたセッション

use std::sync::Arc;

use crate::domain::{Event, RoomName, RoomRegistry, SessionId, Timestamp, Username};

use super::fanout::broadcast_event;

/// ルーム退室のユースケース (Active → Closed)
pub struct LeaveRoomUseCase {
    /// Registry（ルームとメンバーの対応表）
    registry: Arc<dyn RoomRegistry>,
}

impl LeaveRoomUseCase {
    /// 新しい LeaveRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// 退室を実行
    ///
    /// # Returns
    ///
    /// * `true` - メンバーを削除し、退室イベントを送った
    /// * `false` - 該当メンバーがいなかった（何もしていない）
    pub async fn execute(
        &self,
        room: &RoomName,
        session_id: SessionId,
        username: &Username,
    ) -> bool {
        if !self.registry.leave(room, session_id).await {
            tracing::debug!(
                "Session {} was not registered in room '{}', nothing to clean up",
                session_id,
                room
            );
            return false;
        }
        tracing::info!(
            "Session {} ('{}') left room '{}'",
            session_id,
            username,
            room
        );

        let event = Event::leave(username, room, Timestamp::now());
        broadcast_event(self.registry.as_ref(), room, &event).await;
        true
    }
}
