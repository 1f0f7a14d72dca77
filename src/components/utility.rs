use anyhow::Result;
use async_trait::async_trait;

use crate::menu::{DispatchError, OperationGroup, PREVIOUS_OPERATION, Request, Response};

pub const ID: &str = PREVIOUS_OPERATION.group;

/// Navigation helpers shared by every section
pub struct Utility;

#[async_trait]
impl OperationGroup for Utility {
    fn id(&self) -> &'static str {
        ID
    }

    fn operations(&self) -> &'static [&'static str] {
        &["previous_menu_item"]
    }

    async fn invoke(&self, operation: &str, request: Request<'_>) -> Result<Response> {
        match operation {
            // One level above the screen this entry belongs to
            "previous_menu_item" => Ok(Response::back_to(
                request.parent.and_then(|parent| request.tree.parent(parent)),
            )),
            other => Err(DispatchError::method_not_found(ID, other).into()),
        }
    }
}
