use crate::domain::model::Greeting;

pub trait MessageProvider: Send + Sync {
    fn greeting(&self) -> Greeting;
}
