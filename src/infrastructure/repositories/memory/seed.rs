use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle,
};
use chrono::{DateTime, Duration, Utc};

struct Sample {
    title: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    author: &'static str,
    age_hours: i64,
    excerpt: &'static str,
    body: &'static str,
    views: u64,
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "রাজধানীতে নতুন মেট্রো রুটের কাজ শুরু",
        category: "national",
        tags: &["ঢাকা", "মেট্রোরেল", "যোগাযোগ"],
        author: "নিজস্ব প্রতিবেদক",
        age_hours: 2,
        excerpt: "উত্তরা থেকে কমলাপুর পর্যন্ত নতুন রুটের নির্মাণকাজ আনুষ্ঠানিকভাবে শুরু হয়েছে।",
        body: "রাজধানীর যানজট কমাতে নতুন মেট্রো রুটের নির্মাণকাজ শুরু হয়েছে। কর্তৃপক্ষ জানিয়েছে, তিন বছরের মধ্যে রুটটি চালু করার লক্ষ্য রয়েছে।",
        views: 120,
    },
    Sample {
        title: "শেষ ওভারের নাটকীয়তায় সিরিজ জিতল বাংলাদেশ",
        category: "sports",
        tags: &["ক্রিকেট", "বাংলাদেশ"],
        author: "ক্রীড়া প্রতিবেদক",
        age_hours: 26,
        excerpt: "শেষ ওভারে ১২ রানের সমীকরণ মিলিয়ে সিরিজ নিশ্চিত করেছে টাইগাররা।",
        body: "চট্টগ্রামে অনুষ্ঠিত তৃতীয় ম্যাচে শেষ ওভারের রোমাঞ্চে জয় পেয়েছে বাংলাদেশ। এই জয়ে ২-১ ব্যবধানে সিরিজ জিতল স্বাগতিকরা।",
        views: 340,
    },
    Sample {
        title: "রপ্তানি আয়ে নতুন রেকর্ড",
        category: "economy",
        tags: &["অর্থনীতি", "রপ্তানি"],
        author: "অর্থনৈতিক প্রতিবেদক",
        age_hours: 50,
        excerpt: "চলতি অর্থবছরের প্রথম প্রান্তিকে রপ্তানি আয় আগের সব রেকর্ড ছাড়িয়েছে।",
        body: "তৈরি পোশাক খাতের ঊর্ধ্বগতিতে রপ্তানি আয় নতুন উচ্চতায় পৌঁছেছে। রপ্তানি উন্নয়ন ব্যুরোর তথ্যে এ চিত্র উঠে এসেছে।",
        views: 75,
    },
    Sample {
        title: "দেশে তৈরি স্মার্টফোন যাচ্ছে বিদেশে",
        category: "tech",
        tags: &["প্রযুক্তি", "স্মার্টফোন"],
        author: "প্রযুক্তি ডেস্ক",
        age_hours: 74,
        excerpt: "স্থানীয় কারখানায় তৈরি স্মার্টফোনের প্রথম চালান রপ্তানি হয়েছে।",
        body: "দেশীয় একটি প্রতিষ্ঠান তাদের কারখানায় তৈরি স্মার্টফোনের প্রথম চালান মধ্যপ্রাচ্যে পাঠিয়েছে।",
        views: 60,
    },
    Sample {
        title: "আন্তর্জাতিক উৎসবে পুরস্কৃত বাংলা চলচ্চিত্র",
        category: "entertainment",
        tags: &["চলচ্চিত্র", "উৎসব"],
        author: "বিনোদন ডেস্ক",
        age_hours: 122,
        excerpt: "সেরা চিত্রনাট্যের পুরস্কার জিতেছে তরুণ নির্মাতার প্রথম ছবি।",
        body: "ইউরোপের একটি আন্তর্জাতিক চলচ্চিত্র উৎসবে সেরা চিত্রনাট্যের পুরস্কার পেয়েছে একটি বাংলা চলচ্চিত্র।",
        views: 210,
    },
    Sample {
        title: "জলবায়ু সম্মেলনে ক্ষতিপূরণ তহবিলের ঘোষণা",
        category: "world",
        tags: &["জলবায়ু", "আন্তর্জাতিক"],
        author: "আন্তর্জাতিক ডেস্ক",
        age_hours: 8 * 24,
        excerpt: "ক্ষতিগ্রস্ত দেশগুলোর জন্য নতুন তহবিল গঠনে একমত হয়েছে বিশ্বনেতারা।",
        body: "জলবায়ু সম্মেলনের শেষ দিনে ক্ষয়ক্ষতি মোকাবিলায় নতুন তহবিলের ঘোষণা এসেছে। বাংলাদেশ এই তহবিল থেকে সহায়তা পাওয়ার আশা করছে।",
        views: 500,
    },
];

/// Published sample articles `sample-1` … `sample-6`, newest first. The last
/// one is older than the trending window.
pub fn sample_articles(now: DateTime<Utc>) -> Vec<Article> {
    (1_i64..)
        .zip(SAMPLES)
        .filter_map(|(number, sample)| {
            let published_at = now - Duration::hours(sample.age_hours);
            Some(Article {
                id: ArticleId(number),
                title: ArticleTitle::new(sample.title).ok()?,
                slug: ArticleSlug::new(format!("sample-{number}")).ok()?,
                category: sample.category.to_string(),
                tags: sample.tags.iter().map(|t| t.to_string()).collect(),
                author: sample.author.to_string(),
                published_at: Some(published_at),
                excerpt: sample.excerpt.to_string(),
                body: ArticleBody::new(sample.body).ok()?,
                image_url: Some(format!("https://picsum.photos/seed/khabor-{number}/800/450")),
                source: None,
                views: sample.views,
                status: ArticleStatus::Published,
                created_by: None,
                created_at: published_at,
                updated_at: published_at,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::trending_cutoff;

    #[test]
    fn samples_are_published_with_unique_slugs() {
        let now = Utc::now();
        let articles = sample_articles(now);
        assert_eq!(articles.len(), SAMPLES.len());
        assert!(articles.iter().all(Article::is_published));
        let mut slugs: Vec<_> = articles.iter().map(|a| a.slug.as_str()).collect();
        slugs.dedup();
        assert_eq!(slugs.len(), articles.len());
        let stale = articles
            .iter()
            .filter(|a| a.published_at < Some(trending_cutoff(now)))
            .count();
        assert_eq!(stale, 1);
    }

    #[test]
    fn sample_ids_match_their_slugs() {
        for (expected, article) in (1_i64..).zip(sample_articles(Utc::now())) {
            assert_eq!(article.id, ArticleId(expected));
            assert_eq!(article.slug.as_str(), format!("sample-{expected}"));
        }
    }
}
