//! 结果汇总：统计、柱状图数据、筛选

use crate::models::{AnalysisResult, Sentiment};

/// 汇总统计
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
    pub mixed_pct: f64,
    /// 出现最多的情感；并列时取首次出现较晚者，空集为 NEUTRAL
    pub most_common: Sentiment,
    pub avg_confidence: f64,
}

impl DashboardSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let total = results.len();
        if total == 0 {
            return Self {
                total: 0,
                positive_pct: 0.0,
                negative_pct: 0.0,
                neutral_pct: 0.0,
                mixed_pct: 0.0,
                most_common: Sentiment::Neutral,
                avg_confidence: 0.0,
            };
        }

        let counts = chart_data(results);
        let pct = |sentiment: Sentiment| {
            let count = counts
                .iter()
                .find(|(s, _)| *s == sentiment)
                .map(|(_, c)| *c)
                .unwrap_or(0);
            count as f64 / total as f64 * 100.0
        };

        let most_common = most_common(results);

        let avg_confidence = results.iter().map(|r| r.confidence).sum::<f64>() / total as f64;

        Self {
            total,
            positive_pct: pct(Sentiment::Positive),
            negative_pct: pct(Sentiment::Negative),
            neutral_pct: pct(Sentiment::Neutral),
            mixed_pct: pct(Sentiment::Mixed),
            most_common,
            avg_confidence,
        }
    }
}

/// 按首次出现顺序比较数量，并列时后出现的情感胜出
fn most_common(results: &[AnalysisResult]) -> Sentiment {
    let mut seen: Vec<(Sentiment, usize)> = Vec::with_capacity(Sentiment::ALL.len());
    for result in results {
        match seen.iter_mut().find(|(s, _)| *s == result.sentiment) {
            Some((_, count)) => *count += 1,
            None => seen.push((result.sentiment, 1)),
        }
    }

    seen.iter()
        .fold(None, |best: Option<(Sentiment, usize)>, &(sentiment, count)| match best {
            Some(b) if b.1 > count => Some(b),
            _ => Some((sentiment, count)),
        })
        .map(|(sentiment, _)| sentiment)
        .unwrap_or(Sentiment::Neutral)
}

/// 柱状图数据：每种情感的数量，顺序固定
pub fn chart_data(results: &[AnalysisResult]) -> [(Sentiment, usize); 4] {
    Sentiment::ALL.map(|sentiment| {
        let count = results.iter().filter(|r| r.sentiment == sentiment).count();
        (sentiment, count)
    })
}

/// 表格筛选条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentFilter {
    #[default]
    All,
    Only(Sentiment),
}

impl SentimentFilter {
    pub fn matches(&self, result: &AnalysisResult) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Only(sentiment) => result.sentiment == *sentiment,
        }
    }

    pub fn apply<'a>(&self, results: &'a [AnalysisResult]) -> Vec<&'a AnalysisResult> {
        results.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn result(sentiment: Sentiment, confidence: f64) -> AnalysisResult {
        AnalysisResult {
            id: Uuid::new_v4(),
            text: "t".to_string(),
            source: "s".to_string(),
            sentiment,
            confidence,
            keywords: vec![],
            emotions: vec![],
            explanation: "e".to_string(),
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = DashboardSummary::from_results(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.most_common, Sentiment::Neutral);
        assert_eq!(summary.avg_confidence, 0.0);
    }

    #[test]
    fn test_summary_percentages_and_average() {
        let results = vec![
            result(Sentiment::Positive, 0.9),
            result(Sentiment::Positive, 0.7),
            result(Sentiment::Negative, 0.8),
            result(Sentiment::Mixed, 0.6),
        ];
        let summary = DashboardSummary::from_results(&results);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.positive_pct, 50.0);
        assert_eq!(summary.negative_pct, 25.0);
        assert_eq!(summary.neutral_pct, 0.0);
        assert_eq!(summary.mixed_pct, 25.0);
        assert_eq!(summary.most_common, Sentiment::Positive);
        assert!((summary.avg_confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_most_common_tie_prefers_later_first_appearance() {
        let results = vec![result(Sentiment::Positive, 0.5), result(Sentiment::Negative, 0.5)];
        assert_eq!(
            DashboardSummary::from_results(&results).most_common,
            Sentiment::Negative
        );

        let results = vec![result(Sentiment::Negative, 0.5), result(Sentiment::Positive, 0.5)];
        assert_eq!(
            DashboardSummary::from_results(&results).most_common,
            Sentiment::Positive
        );

        let results = vec![
            result(Sentiment::Mixed, 0.5),
            result(Sentiment::Neutral, 0.5),
            result(Sentiment::Mixed, 0.5),
        ];
        assert_eq!(
            DashboardSummary::from_results(&results).most_common,
            Sentiment::Mixed
        );
    }

    #[test]
    fn test_chart_data_order() {
        let results = vec![result(Sentiment::Neutral, 0.5), result(Sentiment::Neutral, 0.5)];
        let data = chart_data(&results);
        assert_eq!(
            data,
            [
                (Sentiment::Positive, 0),
                (Sentiment::Negative, 0),
                (Sentiment::Neutral, 2),
                (Sentiment::Mixed, 0),
            ]
        );
    }

    #[test]
    fn test_filter() {
        let results = vec![
            result(Sentiment::Positive, 0.9),
            result(Sentiment::Negative, 0.8),
            result(Sentiment::Positive, 0.7),
        ];
        assert_eq!(SentimentFilter::All.apply(&results).len(), 3);

        let positives = SentimentFilter::Only(Sentiment::Positive).apply(&results);
        assert_eq!(positives.len(), 2);
        assert!(positives.iter().all(|r| r.sentiment == Sentiment::Positive));
    }
}
