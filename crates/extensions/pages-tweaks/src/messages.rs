//! Confirmation dialogs for mail deletion.

use async_trait::async_trait;

use lesuite_protocols::{DomPatch, HandlerError, PageContext, PageHandler};

const CONFIRM_MESSAGE: &str = "Delete Mail?";

/// Gates both delete paths on the messages page behind a confirm dialog:
/// the per-message delete links and the checked-messages delete link.
pub struct DeleteMailConfirm;

#[async_trait]
impl PageHandler for DeleteMailConfirm {
    fn id(&self) -> &str {
        "delete_mail_confirm"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        if ctx.page().contains("messages4.php") {
            ctx.emit(DomPatch::ConfirmClick {
                target: r#"a[href*="messages4.php"]"#.to_string(),
                message: CONFIRM_MESSAGE.to_string(),
            });
        }
        if ctx.page().contains("submitchecks('delete')") {
            ctx.emit(DomPatch::ConfirmClick {
                target: r#"a[onclick*="submitchecks('delete');"]"#.to_string(),
                message: CONFIRM_MESSAGE.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "messages_tests.rs"]
mod tests;
