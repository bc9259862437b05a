use crate::rights::types::Delegate;
use async_graphql::Object;

pub const HEAD_BLOCK: &str = "head";

#[derive(Default)]
pub struct Query;

#[Object]
impl Query {
    /// A delegate at the given block (hash, level or alias, `head` by default).
    async fn delegate(
        &self,
        #[graphql(validator(min_length = 1))] address: String,
        #[graphql(validator(min_length = 1), default_with = "HEAD_BLOCK.to_string()")]
        block: String,
    ) -> Delegate {
        Delegate {
            address,
            block_hash: block,
        }
    }
}
