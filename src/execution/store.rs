//! Order ledger

use std::sync::Arc;
use tokio::sync::RwLock;

use super::{AdmissionEngine, AdmissionError, Clock, IdGenerator, Order, OrderTicketInput};
use crate::portfolio::{PortfolioSnapshot, PortfolioSource, SnapshotBuilder};
use crate::risk::MetricsError;

/// Portfolio snapshot plus the newest-first ledger of accepted orders
///
/// Orders enter the ledger only through [`AdmissionEngine::submit`].
#[derive(Debug, Clone)]
pub struct OrderStore {
    portfolio: PortfolioSnapshot,
    orders: Vec<Order>,
}

impl OrderStore {
    /// Create a store with an empty ledger
    pub fn new(portfolio: PortfolioSnapshot) -> Self {
        Self {
            portfolio,
            orders: vec![],
        }
    }

    /// Snapshot orders are validated against
    pub fn portfolio(&self) -> &PortfolioSnapshot {
        &self.portfolio
    }

    /// Accepted orders, newest first
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by id
    pub fn find(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Replace the snapshot, keeping order history
    pub fn refresh(&mut self, portfolio: PortfolioSnapshot) {
        self.portfolio = portfolio;
    }

    pub(crate) fn prepend(&mut self, order: Order) {
        self.orders.insert(0, order);
    }
}

/// Fresh store: newly built snapshot, empty ledger
pub fn reset_store<S: PortfolioSource>(
    builder: &SnapshotBuilder<S>,
) -> Result<OrderStore, MetricsError> {
    let store = OrderStore::new(builder.build()?);
    tracing::info!("Order store reset");
    Ok(store)
}

/// An [`OrderStore`] shared between concurrent callers
///
/// Validation and append happen under one write lock, so every accepted
/// order was checked against a ledger that includes all earlier ones.
#[derive(Debug, Clone)]
pub struct SharedOrderStore {
    inner: Arc<RwLock<OrderStore>>,
}

impl SharedOrderStore {
    pub fn new(store: OrderStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Admit a ticket while holding exclusive access to the ledger
    pub async fn submit<C: Clock, G: IdGenerator>(
        &self,
        engine: &AdmissionEngine<C, G>,
        ticket: &OrderTicketInput,
    ) -> Result<Order, AdmissionError> {
        let mut store = self.inner.write().await;
        engine.submit(ticket, &mut store)
    }

    /// Copy of the ledger, newest first
    pub async fn orders(&self) -> Vec<Order> {
        self.inner.read().await.orders().to_vec()
    }

    /// Copy of the current snapshot
    pub async fn portfolio(&self) -> PortfolioSnapshot {
        self.inner.read().await.portfolio().clone()
    }

    /// Swap in a newer snapshot
    pub async fn refresh(&self, portfolio: PortfolioSnapshot) {
        self.inner.write().await.refresh(portfolio);
    }

    /// Reinitialize with a fresh snapshot and empty ledger
    pub async fn reset<S: PortfolioSource>(
        &self,
        builder: &SnapshotBuilder<S>,
    ) -> Result<(), MetricsError> {
        let fresh = reset_store(builder)?;
        *self.inner.write().await = fresh;
        Ok(())
    }
}
