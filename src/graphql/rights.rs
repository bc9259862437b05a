use crate::rights::types::{BakingRight, EndorsingRight, RawFields};
use async_graphql::{ComplexObject, Json};

#[ComplexObject]
impl BakingRight {
    /// Record keys without a dedicated field, as returned by the node.
    async fn extra(&self) -> Json<RawFields> {
        Json(self.extra.clone())
    }
}

#[ComplexObject]
impl EndorsingRight {
    /// Record keys without a dedicated field, as returned by the node.
    async fn extra(&self) -> Json<RawFields> {
        Json(self.extra.clone())
    }
}
