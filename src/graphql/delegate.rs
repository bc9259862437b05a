use crate::rights::resolver::RightsResolver;
use crate::rights::types::{
    BakingRight, BakingRightsArgs, Delegate, EndorsingRight, EndorsingRightsArgs,
};
use async_graphql::{ComplexObject, Context, ErrorExtensions, Result};

#[ComplexObject]
impl Delegate {
    /// Baking rights of this delegate at `blockHash`. `null` when the node has
    /// nothing for the requested scope.
    async fn baking_rights(
        &self,
        ctx: &Context<'_>,
        level: Option<Vec<u32>>,
        cycle: Option<Vec<u32>>,
        max_priority: Option<u32>,
    ) -> Result<Option<Vec<BakingRight>>> {
        let resolver = ctx.data::<RightsResolver>()?;
        let args = BakingRightsArgs {
            level,
            cycle,
            max_priority,
        };

        resolver
            .baking_rights(self, args)
            .await
            .map_err(|e| e.extend())
    }

    /// Endorsing rights of this delegate at `blockHash`. `null` when the node
    /// has nothing for the requested scope.
    async fn endorsing_rights(
        &self,
        ctx: &Context<'_>,
        level: Option<Vec<u32>>,
        cycle: Option<Vec<u32>>,
    ) -> Result<Option<Vec<EndorsingRight>>> {
        let resolver = ctx.data::<RightsResolver>()?;

        resolver
            .endorsing_rights(self, EndorsingRightsArgs { level, cycle })
            .await
            .map_err(|e| e.extend())
    }
}
