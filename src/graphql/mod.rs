pub mod delegate;
pub mod query;
pub mod rights;

use crate::rights::resolver::RightsResolver;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use query::Query;

pub type RightsSchema = Schema<Query, EmptyMutation, EmptySubscription>;

pub fn build_schema(resolver: RightsResolver) -> RightsSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(resolver)
        .finish()
}
