//! tokio上でのセッション駆動
//!
//! イベント適用はMutex内で同期的に完了させ、OCRの遅延だけを
//! タスクとして登録する。タスクはセッションをWeakで参照し、
//! ランタイム破棄後に発火しても何もしない。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use vision_tour_common::{Error, Result};

use crate::session::{TourEffect, TourEvent, TourSession};
use crate::snapshot::TourSnapshot;

pub struct TourRuntime {
    session: Arc<Mutex<TourSession>>,
}

impl Default for TourRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl TourRuntime {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(TourSession::new())),
        }
    }

    /// イベントを適用し、副作用があればタスクとして登録する
    ///
    /// 状態の更新はタスクの登録に成功した場合のみ反映する。
    ///
    /// # Returns
    /// 登録したタイマータスクのハンドル（副作用がない場合None）
    ///
    /// # Errors
    /// タイマーが必要なイベントをtokioランタイム外で適用した場合
    /// `Error::TimerUnavailable`。セッションは変化しない。
    pub fn dispatch(&self, event: TourEvent) -> Result<Option<JoinHandle<()>>> {
        let handle = Handle::try_current();
        let mut session = lock(&self.session);

        let mut next = session.clone();
        let task = match next.dispatch(event) {
            Some(effect) => {
                let handle = handle.map_err(|e| {
                    log::warn!("ocr: no async runtime, event discarded");
                    Error::TimerUnavailable(e.to_string())
                })?;
                Some(self.run_effect(&handle, effect))
            }
            None => None,
        };
        *session = next;
        Ok(task)
    }

    pub fn snapshot(&self) -> TourSnapshot {
        lock(&self.session).snapshot()
    }

    fn run_effect(&self, handle: &Handle, effect: TourEffect) -> JoinHandle<()> {
        match effect {
            TourEffect::ScheduleOcrCompletion { delay } => {
                // 期限はイベント適用時点から数える
                let deadline = Instant::now() + delay;
                let session = Arc::downgrade(&self.session);
                handle.spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    match session.upgrade() {
                        Some(session) => {
                            lock(&session).dispatch(TourEvent::OcrDelayElapsed);
                        }
                        None => log::debug!("ocr: session dropped before completion"),
                    }
                })
            }
        }
    }
}

fn lock(session: &Mutex<TourSession>) -> MutexGuard<'_, TourSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}
