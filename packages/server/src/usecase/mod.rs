//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

mod fanout;
pub mod join_room;
pub mod leave_room;
pub mod relay_message;

pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use relay_message::RelayMessageUseCase;
