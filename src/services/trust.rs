use crate::{
    db::FeedbackStore,
    errors::AppError,
    models::{NewFeedback, TrustScore},
};

pub async fn submit_feedback(
    feedback: NewFeedback,
    store: &dyn FeedbackStore,
) -> Result<(), AppError> {
    store.insert(feedback).await?;
    Ok(())
}

pub async fn get_trust_score(url: &str, store: &dyn FeedbackStore) -> Result<TrustScore, AppError> {
    let records = store.find_by_url(url).await?;
    Ok(TrustScore::from_ratings(
        url,
        records.into_iter().map(|r| r.rating),
    ))
}
