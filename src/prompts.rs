use crate::text::take_chars;
use crate::Category;

const TITLE_EXCERPT: usize = 1000;
const KEYWORD_EXCERPT: usize = 1500;
const META_EXCERPT: usize = 1000;
const CATEGORY_EXCERPT: usize = 1000;
const OPTIMIZE_EXCERPT: usize = 2000;

pub fn titles(content: &str) -> String {
    format!(
        "Based on the following blog post content, generate 5 compelling and SEO-friendly titles.
Make them engaging, clear, and under 60 characters each.
Return only the titles, one per line, without numbering or bullets.

Content: {}...",
        take_chars(content, TITLE_EXCERPT)
    )
}

pub fn keywords(title: &str, content: &str) -> String {
    format!(
        "Analyze the following blog post and extract 8-10 relevant SEO keywords and phrases.
Focus on terms that readers would search for to find this content.
Return only the keywords, separated by commas.

Title: {title}
Content: {}...",
        take_chars(content, KEYWORD_EXCERPT)
    )
}

pub fn meta_description(title: &str, content: &str) -> String {
    format!(
        "Create a compelling meta description for this blog post.
It should be 150-160 characters, include the main topic, and encourage clicks.
Make it descriptive but concise.

Title: {title}
Content: {}...

Return only the meta description, no additional text.",
        take_chars(content, META_EXCERPT)
    )
}

pub fn categories(title: &str, content: &str, existing: &[Category]) -> String {
    let names = existing
        .iter()
        .map(|category| category.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Based on the blog post content, suggest which of these existing categories best fit:
{names}

Title: {title}
Content: {}...

Return only the category names that match, separated by commas. Maximum 3 categories.",
        take_chars(content, CATEGORY_EXCERPT)
    )
}

pub fn optimize(content: &str) -> String {
    format!(
        "Analyze this blog post content and provide:
1. 3 suggestions for improvement
2. 2 readability improvements
3. A readability score from 1-10 (10 being most readable)

Format your response as:
SUGGESTIONS:
- suggestion 1
- suggestion 2
- suggestion 3

IMPROVEMENTS:
- improvement 1
- improvement 2

SCORE: X

Content: {}...",
        take_chars(content, OPTIMIZE_EXCERPT)
    )
}
