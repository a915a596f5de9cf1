// src/infrastructure/repositories/postgres/article.rs
use crate::domain::article::{
    Article, ArticleBody, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug,
    ArticleSort, ArticleStatus, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::user::UserId;
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const ARTICLE_COLUMNS: &str = "id, title, slug, category, tags, author, published_at, excerpt, body, \
     image_url, source, views, status, created_by, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    category: String,
    tags: Vec<String>,
    author: String,
    published_at: Option<DateTime<Utc>>,
    excerpt: String,
    body: String,
    image_url: Option<String>,
    source: Option<String>,
    views: i64,
    status: String,
    created_by: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            category: row.category,
            tags: row.tags,
            author: row.author,
            published_at: row.published_at,
            excerpt: row.excerpt,
            body: ArticleBody::new(row.body)?,
            image_url: row.image_url,
            source: row.source,
            views: u64::try_from(row.views)
                .map_err(|_| DomainError::Persistence("negative view counter".into()))?,
            status: row.status.parse::<ArticleStatus>()?,
            created_by: row.created_by.map(UserId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

/// Escapes `LIKE` wildcards so user text matches literally.
fn like_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            category,
            tags,
            author,
            published_at,
            excerpt,
            body,
            image_url,
            source,
            status,
            created_by,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, slug, category, tags, author, published_at, excerpt, body,
                                   image_url, source, views, status, created_by, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 0, $11, $12, $13, $13)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(category)
            .bind(tags)
            .bind(author)
            .bind(published_at)
            .bind(excerpt)
            .bind(body.as_str())
            .bind(image_url)
            .bind(source)
            .bind(status.as_str())
            .bind(created_by.map(i64::from))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            category,
            tags,
            author,
            excerpt,
            body,
            image_url,
            source,
            status,
            published_at,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category);
        }
        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags);
        }
        if let Some(author) = author {
            builder.push(", author = ");
            builder.push_bind(author);
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }
        if let Some(image_url) = image_url {
            builder.push(", image_url = ");
            builder.push_bind(image_url);
        }
        if let Some(source) = source {
            builder.push(", source = ");
            builder.push_bind(source);
        }
        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(published_at) = published_at {
            builder.push(", published_at = ");
            builder.push_bind(published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<Article> {
        let sql = format!("DELETE FROM articles WHERE id = $1 RETURNING {ARTICLE_COLUMNS}");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<Article> {
        let sql = format!(
            "UPDATE articles SET views = views + 1 WHERE id = $1 RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }
}

impl PostgresArticleReadRepository {
    /// Renders the same predicate as `ArticleFilter::matches`.
    fn apply_conditions<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &ArticleFilter) {
        let mut has_where = false;
        let mut clause = |builder: &mut QueryBuilder<'a, Postgres>| {
            builder.push(if has_where { " AND " } else { " WHERE " });
            has_where = true;
        };

        if filter.published_only {
            clause(builder);
            builder.push("status = 'published'");
        }
        if let Some(text) = &filter.text {
            let pattern = like_pattern(text);
            clause(builder);
            builder.push("(title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" ESCAPE '\\' OR excerpt ILIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\')");
        }
        if let Some(category) = &filter.category {
            clause(builder);
            builder.push("category = ");
            builder.push_bind(category.clone());
        }
        if let Some(tag) = &filter.tag {
            clause(builder);
            builder.push_bind(tag.clone());
            builder.push(" = ANY(tags)");
        }
        if let Some(from) = filter.published_from {
            clause(builder);
            builder.push("published_at >= ");
            builder.push_bind(from);
        }
        if let Some(to) = filter.published_to {
            clause(builder);
            builder.push("published_at <= ");
            builder.push_bind(to);
        }
    }

    fn list_query(filter: &ArticleFilter, page: PageRequest) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(" FROM articles");
        Self::apply_conditions(&mut builder, filter);
        Self::apply_ordering(&mut builder, filter.sort);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.limit()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));
        builder
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, sort: ArticleSort) {
        builder.push(match sort {
            ArticleSort::Recency => " ORDER BY published_at DESC NULLS LAST, id DESC",
            ArticleSort::Views => " ORDER BY views DESC, id DESC",
            ArticleSort::Created => " ORDER BY created_at DESC, id DESC",
        });
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, filter: &ArticleFilter, page: PageRequest) -> DomainResult<Vec<Article>> {
        let rows = Self::list_query(filter, page)
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_articles(rows)
    }

    async fn list_by_creator(&self, creator: UserId) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE created_by = $1
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(creator))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_articles(rows)
    }

    async fn count_published_by_creators(
        &self,
        creators: &[UserId],
    ) -> DomainResult<HashMap<UserId, u64>> {
        if creators.is_empty() {
            return Ok(HashMap::new());
        }
        let ids: Vec<i64> = creators.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, (i64, i64)>(
            "SELECT created_by, COUNT(*) FROM articles
             WHERE status = 'published' AND created_by = ANY($1)
             GROUP BY created_by",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (UserId(id), u64::try_from(count).unwrap_or(0)))
            .collect())
    }
}
