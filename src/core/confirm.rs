use async_trait::async_trait;

/// Asks the person at the keyboard whether a reply is worth remembering.
#[async_trait]
pub trait Confirm: Send {
    async fn confirm(&mut self, prompt: &str) -> bool;

    async fn acknowledge(&mut self, _notice: &str) {}
}

/// Answers every prompt the same way without asking anyone.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

#[async_trait]
impl Confirm for FixedAnswer {
    async fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}
