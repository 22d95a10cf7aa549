// SPDX-License-Identifier: AGPL-3.0-or-later
//! Content categories and their template blocks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Template category; selects the offered blocks and the remote database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Presentation")]
    Presentation,
    #[serde(rename = "Video Message")]
    VideoMessage,
    #[serde(rename = "Anica Chat")]
    AnicaChat,
    #[serde(rename = "Blog Posts")]
    BlogPosts,
    #[serde(rename = "News Article")]
    NewsArticle,
    #[serde(rename = "Newsletter")]
    Newsletter,
    #[serde(rename = "Email Templates")]
    EmailTemplates,
    #[serde(rename = "Custom Templates")]
    CustomTemplates,
}

impl Category {
    /// Display name, also the serialized form
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SocialMedia => "Social Media",
            Self::Presentation => "Presentation",
            Self::VideoMessage => "Video Message",
            Self::AnicaChat => "Anica Chat",
            Self::BlogPosts => "Blog Posts",
            Self::NewsArticle => "News Article",
            Self::Newsletter => "Newsletter",
            Self::EmailTemplates => "Email Templates",
            Self::CustomTemplates => "Custom Templates",
        }
    }

    /// Lowercase hyphenated name, used for config keys
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::SocialMedia => "social-media",
            Self::Presentation => "presentation",
            Self::VideoMessage => "video-message",
            Self::AnicaChat => "anica-chat",
            Self::BlogPosts => "blog-posts",
            Self::NewsArticle => "news-article",
            Self::Newsletter => "newsletter",
            Self::EmailTemplates => "email-templates",
            Self::CustomTemplates => "custom-templates",
        }
    }

    /// Template blocks offered for this category
    pub const fn blocks(&self) -> &'static [TemplateBlock] {
        match self {
            Self::SocialMedia => SOCIAL_MEDIA,
            Self::Presentation => PRESENTATION,
            Self::VideoMessage => VIDEO_MESSAGE,
            Self::AnicaChat => ANICA_CHAT,
            Self::BlogPosts => BLOG_POSTS,
            Self::NewsArticle => NEWS_ARTICLE,
            Self::Newsletter => NEWSLETTER,
            Self::EmailTemplates => EMAIL_TEMPLATES,
            Self::CustomTemplates => CUSTOM_TEMPLATES,
        }
    }

    /// All categories in menu order
    pub const ALL: [Self; 9] = [
        Self::SocialMedia,
        Self::Presentation,
        Self::VideoMessage,
        Self::AnicaChat,
        Self::BlogPosts,
        Self::NewsArticle,
        Self::Newsletter,
        Self::EmailTemplates,
        Self::CustomTemplates,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the display label or the slug
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s || c.slug() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A named piece of boilerplate text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateBlock {
    pub name: &'static str,
    pub template: &'static str,
}

const fn block(name: &'static str, template: &'static str) -> TemplateBlock {
    TemplateBlock { name, template }
}

const SOCIAL_MEDIA: &[TemplateBlock] = &[
    block("Hook Line", "🎯 [Attention-grabbing opening line that stops the scroll]\n\n"),
    block("Main Content", "[Your main message - keep it concise and engaging]\n\n"),
    block(
        "Value Proposition",
        "✨ Why this matters to your audience:\n• [Key benefit 1]\n• [Key benefit 2]\n• [Key benefit 3]\n\n",
    ),
    block("Call to Action", "👉 [Clear action you want people to take]\n\n"),
    block("Hashtags", "#hashtag1 #hashtag2 #hashtag3 #YourBrand"),
];

const BLOG_POSTS: &[TemplateBlock] = &[
    block("SEO Title", "# [SEO-Optimized Title with Primary Keyword]\n\n"),
    block(
        "Hook/Introduction",
        "[Compelling opening that addresses your reader's pain point or curiosity]\n\nIn this post, you'll discover:\n• [Key point 1]\n• [Key point 2]\n• [Key point 3]\n\n",
    ),
    block(
        "H2 Section Header",
        "## [Descriptive Section Header]\n\n[Content for this section - aim for 150-300 words per section]\n\n",
    ),
    block(
        "H3 Subsection",
        "### [Specific Subtopic]\n\n[Detailed explanation or examples]\n\n",
    ),
    block(
        "Bullet List",
        "Here are the key points:\n\n• [Point 1 - be specific]\n• [Point 2 - add value]\n• [Point 3 - actionable tip]\n\n",
    ),
    block(
        "Numbered List",
        "Follow these steps:\n\n1. [First step - clear action]\n2. [Second step - logical progression]\n3. [Third step - build momentum]\n4. [Final step - achieve result]\n\n",
    ),
    block(
        "Quote Block",
        "> \"[Inspiring or relevant quote that supports your point]\"\n> \n> — [Author Name]\n\n",
    ),
    block(
        "Call-to-Action",
        "## Ready to Take Action?\n\n[Compelling reason to act now]\n\n[Clear, specific action you want readers to take]\n\n**[BUTTON TEXT]**\n\n",
    ),
    block(
        "Conclusion",
        "## Key Takeaways\n\n[Summarize the main points and reinforce the value delivered]\n\n[End with a question to encourage comments and engagement]\n\n",
    ),
];

const NEWS_ARTICLE: &[TemplateBlock] = &[
    block("Headline", "# [News Headline - Clear, Factual, Compelling]\n\n"),
    block(
        "Lead Paragraph",
        "[Lead paragraph covering Who, What, When, Where, Why - most important info first]\n\n",
    ),
    block(
        "Body Paragraph",
        "[Supporting details, quotes, and additional context]\n\n",
    ),
    block(
        "Quote Block",
        "\"[Direct quote from key source],\" said [Name, Title, Organization].\n\n",
    ),
    block(
        "Background Info",
        "[Background information and context for readers unfamiliar with the topic]\n\n",
    ),
    block(
        "Attribution",
        "*Source: [Attribution information]*\n*Published: [Date]*\n*Reporter: [Your Name]*\n\n",
    ),
];

const NEWSLETTER: &[TemplateBlock] = &[
    block(
        "Subject Line",
        "**Subject:** [Compelling subject line that gets opened]\n\n",
    ),
    block(
        "Personal Greeting",
        "Hi [First Name],\n\n[Personal, conversational opening]\n\n",
    ),
    block(
        "Main Story",
        "## 📰 This Week's Highlight\n\n[Your main content or story]\n\n",
    ),
    block(
        "Quick Updates",
        "## 🔥 Quick Updates\n\n• **[Update 1]:** [Brief description]\n• **[Update 2]:** [Brief description]\n• **[Update 3]:** [Brief description]\n\n",
    ),
    block(
        "Featured Content",
        "## ⭐ Featured This Week\n\n**[Content Title]**\n[Brief description and value proposition]\n\n[CALL-TO-ACTION BUTTON]\n\n",
    ),
    block(
        "Community Spotlight",
        "## 👥 Community Spotlight\n\n[Highlight community member, testimonial, or user-generated content]\n\n",
    ),
    block(
        "Sign-off",
        "[Personal closing message]\n\nBest,\n[Your Name]\n\nP.S. [Engaging postscript or bonus tip]\n\n---\n\n[Unsubscribe link and footer information]",
    ),
];

const EMAIL_TEMPLATES: &[TemplateBlock] = &[
    block(
        "Subject Line",
        "**Subject:** [Clear, benefit-driven subject line]\n\n",
    ),
    block(
        "Personal Opening",
        "Hi [Name],\n\n[Personalized opening that connects with the recipient]\n\n",
    ),
    block(
        "Value Proposition",
        "[Clear statement of what's in it for them]\n\n",
    ),
    block(
        "Main Content",
        "[Your main message - keep it scannable with short paragraphs]\n\n",
    ),
    block(
        "Social Proof",
        "> \"[Testimonial or quote that builds credibility]\"\n> — [Customer Name, Title]\n\n",
    ),
    block(
        "Clear CTA",
        "[Compelling reason to act]\n\n**[ACTION BUTTON TEXT]**\n\n",
    ),
    block(
        "Professional Closing",
        "Best regards,\n\n[Your Name]\n[Your Title]\n[Company Name]\n[Contact Information]\n\n",
    ),
];

const PRESENTATION: &[TemplateBlock] = &[
    block(
        "Title Slide",
        "# [Presentation Title]\n## [Subtitle or Key Message]\n\n**Presented by:** [Your Name]\n**Date:** [Date]\n**Audience:** [Target Audience]\n\n---\n\n",
    ),
    block(
        "Agenda/Overview",
        "## Agenda\n\n1. [Section 1]\n2. [Section 2]\n3. [Section 3]\n4. [Q&A]\n\n**Duration:** [X minutes]\n\n---\n\n",
    ),
    block(
        "Problem Statement",
        "## The Challenge\n\n[Clearly define the problem or opportunity]\n\n• **Impact:** [Who is affected]\n• **Scope:** [How big is the problem]\n• **Urgency:** [Why solve it now]\n\n---\n\n",
    ),
    block(
        "Solution Slide",
        "## Our Solution\n\n[Present your solution clearly]\n\n✅ **Benefit 1:** [Key advantage]\n✅ **Benefit 2:** [Key advantage]\n✅ **Benefit 3:** [Key advantage]\n\n---\n\n",
    ),
    block(
        "Data/Stats Slide",
        "## Key Statistics\n\n📊 **[Stat 1]:** [Number]% [Context]\n📈 **[Stat 2]:** [Number]x [Improvement]\n💡 **[Stat 3]:** [Compelling data point]\n\n*Source: [Data source]*\n\n---\n\n",
    ),
    block(
        "Call to Action",
        "## Next Steps\n\n[What you want the audience to do]\n\n1. **[Action 1]** - [Timeline]\n2. **[Action 2]** - [Timeline]\n3. **[Action 3]** - [Timeline]\n\n**Contact:** [Your contact information]\n\n---\n\n",
    ),
];

const VIDEO_MESSAGE: &[TemplateBlock] = &[
    block(
        "Hook (0-5 seconds)",
        "🎬 **HOOK** (0-5 seconds)\n\"[Attention-grabbing opening line or visual]\"\n\n**Visual:** [Description of opening shot]\n**Audio:** [Background music/sound]\n\n",
    ),
    block(
        "Introduction (5-15 seconds)",
        "👋 **INTRODUCTION** (5-15 seconds)\n\"Hi, I'm [Name] and today we're going to [main topic/benefit]\"\n\n**Visual:** [Speaking to camera, graphics, etc.]\n**Key Message:** [What viewers will learn/get]\n\n",
    ),
    block(
        "Main Content Block",
        "📝 **MAIN CONTENT** ([X:XX] minutes)\n\n**Key Point:** [Main message]\n\"[What you'll say]\"\n\n**Visual Elements:**\n• [Screen recordings, graphics, examples]\n• [Props or demonstrations]\n• [B-roll footage]\n\n**Transition:** [How to move to next section]\n\n",
    ),
    block(
        "Call to Action",
        "🎯 **CALL TO ACTION** (Final 10-15 seconds)\n\"[Clear, specific action you want viewers to take]\"\n\n**Visual:** [Subscribe button, link, contact info]\n**Urgency:** [Why act now]\n**Make it Easy:** [How to take action]\n\n",
    ),
    block(
        "Technical Notes",
        "⚙️ **TECHNICAL SPECIFICATIONS**\n\n**Duration:** [X:XX] minutes\n**Resolution:** [1080p, 4K, etc.]\n**Format:** [MP4, MOV, etc.]\n**Platform:** [YouTube, Instagram, TikTok, etc.]\n\n**Equipment:**\n• Camera: [Camera specs]\n• Audio: [Microphone setup]\n• Lighting: [Lighting setup]\n\n",
    ),
];

const ANICA_CHAT: &[TemplateBlock] = &[
    block(
        "Greeting",
        "Hey there! 👋 \n\n[Warm, personal greeting that matches the conversation context]\n\n",
    ),
    block(
        "Empathy Statement",
        "I totally understand [specific situation/feeling]. [Share brief relatable experience or validation]\n\n",
    ),
    block(
        "Solution/Advice",
        "Here's what I've found works really well:\n\n[Practical, actionable advice in Anica's conversational style]\n\n",
    ),
    block(
        "Personal Story",
        "This reminds me of when [brief personal anecdote that adds value and connection]\n\nThe lesson I learned was [key insight]\n\n",
    ),
    block(
        "Encouraging Close",
        "You've totally got this! [Specific encouragement]\n\nRemember: [Key motivational message]\n\n💪 Keep me posted on how it goes!\n\n",
    ),
    block(
        "Question Prompt",
        "I'd love to know - [thoughtful question that encourages engagement]\n\nWhat's been your experience with [relevant topic]? 🤔\n\n",
    ),
];

const CUSTOM_TEMPLATES: &[TemplateBlock] = &[
    block("Custom Header", "# [Your Custom Header]\n\n"),
    block("Custom Content Block", "[Your custom content goes here]\n\n"),
    block("Custom CTA", "[Your custom call-to-action]\n\n"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_blocks() {
        for category in Category::ALL {
            assert!(!category.blocks().is_empty(), "{category} has no blocks");
        }
    }

    #[test]
    fn test_parse_label_and_slug() {
        assert_eq!("Blog Posts".parse::<Category>().unwrap(), Category::BlogPosts);
        assert_eq!("blog-posts".parse::<Category>().unwrap(), Category::BlogPosts);
        assert_eq!(
            "Podcast".parse::<Category>().unwrap_err(),
            UnknownCategory("Podcast".to_string())
        );
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::EmailTemplates).unwrap();
        assert_eq!(json, "\"Email Templates\"");
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_blog_numbered_list_template() {
        let numbered = Category::BlogPosts
            .blocks()
            .iter()
            .find(|b| b.name == "Numbered List")
            .unwrap();
        assert!(numbered.template.contains("1. [First step"));
    }
}
