use anyhow::Result;
use rusqlite::Connection;
use tokio::sync::{mpsc, oneshot};

pub mod db_thread;

pub trait DbRequest: Send + Sync + 'static {
    type ReturnValue: Send + 'static;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue;
}

#[derive(Clone)]
pub struct DbHandle {
    tx: mpsc::Sender<Box<dyn ErasedDbRequest>>,
}

impl DbHandle {
    pub fn new(tx: mpsc::Sender<Box<dyn ErasedDbRequest>>) -> Self {
        Self { tx }
    }

    pub async fn request<R>(&self, req: R) -> Result<R::ReturnValue>
    where
        R: DbRequest,
    {
        let (resp_tx, resp_rx) = oneshot::channel();
        let wrapped = RequestWrapper {
            inner: req,
            resp_tx,
        };
        self.tx
            .send(Box::new(wrapped))
            .await
            .map_err(|_| anyhow::anyhow!("Database thread is no longer running"))?;
        Ok(resp_rx.await?)
    }
}

pub trait ErasedDbRequest: Send + Sync {
    fn execute_boxed(self: Box<Self>, conn: &mut Connection);
}

struct RequestWrapper<R: DbRequest> {
    inner: R,
    resp_tx: oneshot::Sender<R::ReturnValue>,
}

impl<R: DbRequest> ErasedDbRequest for RequestWrapper<R> {
    fn execute_boxed(self: Box<Self>, conn: &mut Connection) {
        let result = self.inner.execute(conn);
        let _ = self.resp_tx.send(result);
    }
}

/// Fresh in-memory database with the full schema applied.
#[cfg(test)]
pub fn test_connection() -> Connection {
    let mut conn = Connection::open_in_memory().expect("in-memory database");
    db_thread::initialise_database(&mut conn).expect("schema");
    conn
}
