use crate::models::entry::AnalysisRequestItem;

const SAMPLES: [(&str, &str); 4] = [
    (
        "The new phone has an incredible camera and the battery life is amazing. Best purchase this year!",
        "Product Review",
    ),
    (
        "I'm very disappointed with the customer service. I was on hold for over an hour and my issue is still not resolved.",
        "Support Ticket",
    ),
    (
        "The package arrived today, three days earlier than expected. Everything was in order.",
        "Shipping Feedback",
    ),
    (
        "The user interface is a bit confusing to navigate. It took me a while to find the settings menu.",
        "User Survey",
    ),
];

/// 演示用的固定样例
pub fn sample_items() -> Vec<AnalysisRequestItem> {
    SAMPLES
        .iter()
        .map(|(text, source)| AnalysisRequestItem::new(*text, *source))
        .collect()
}
