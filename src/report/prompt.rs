//! Prompt templates: the audit instruction sent to the model and the
//! implementation prompt users copy from a recommendation card.

use std::fmt;
use std::str::FromStr;

use super::model::Recommendation;

/// Builds the audit instruction for a site.
pub type PromptBuilder = fn(&str) -> String;

/// Model identifier plus the prompt it is paired with.
#[derive(Clone)]
pub struct ModelProfile {
    pub name: &'static str,
    pub model: String,
    pub prompt: PromptBuilder,
}

impl ModelProfile {
    /// Flash model, full cognitive audit. Favoured for reliable structured JSON.
    pub fn cognitive() -> Self {
        Self {
            name: "cognitive",
            model: "gemini-3-flash-preview".to_string(),
            prompt: cognitive_audit_prompt,
        }
    }

    /// Pro model with the shorter technical audit wording.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            model: "gemini-3-pro-preview".to_string(),
            prompt: classic_audit_prompt,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn build_prompt(&self, site_url: &str) -> String {
        (self.prompt)(site_url)
    }
}

impl Default for ModelProfile {
    fn default() -> Self {
        Self::cognitive()
    }
}

impl fmt::Debug for ModelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelProfile")
            .field("name", &self.name)
            .field("model", &self.model)
            .finish()
    }
}

impl FromStr for ModelProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cognitive" => Ok(Self::cognitive()),
            "classic" => Ok(Self::classic()),
            other => Err(format!("unknown model profile '{other}' (expected cognitive or classic)")),
        }
    }
}

pub fn cognitive_audit_prompt(site_url: &str) -> String {
    format!(
        r#"Perform a comprehensive "Cognitive & Technical SEO Audit" for the domain: {site_url}.

Act as a Senior Technical SEO Consultant. Analyze the site across these specific dimensions:
1. Entity SEO & Topical Authority: Knowledge Graph associations.
2. Search Intent Alignment: Content type vs user psychology.
3. NLP Sentiment: Tone consistency for the niche.
4. Technical Depth: JS rendering, hydration, and Core Web Vitals.
5. Architecture: Crawl budget and link equity.
6. AI/SGE Readiness: Visibility in AI summaries.
7. Security: Trust signals (SSL, headers).

Use the Google Search tool to gather real-time data about the site's footprint and technical profile.
Return a valid JSON object following the requested schema."#
    )
}

pub fn classic_audit_prompt(site_url: &str) -> String {
    format!(
        r#"Run a 360 degree SEO audit of {site_url} as an expert technical SEO auditor.

Score each pillar from 0 to 100: entity associations, search intent alignment,
sentiment and tone, JavaScript rendering depth, crawlability and security posture,
and readiness for AI-generated search answers.
Give concrete recommendations with an impact level and one actionable step each.

Search the live web for the site before answering.
Respond with syntactically valid JSON that matches the provided schema exactly."#
    )
}

/// Prompt a user pastes into an assistant to get the fix for one recommendation.
pub fn implementation_prompt(rec: &Recommendation) -> String {
    format!(
        r#"Act as an Expert Global SEO Architect and NLP Specialist.
I am implementing a "Cognitive SEO" optimization.
Context:
- ISSUE: {title}
- CATEGORY: {category}
- DETAIL: {description}
- ACTIONABLE STEP: {step}

Please provide a master-level implementation.
If it involves Entity SEO, provide the JSON-LD for Organization/Person/SameAs associations.
If it involves Search Intent, show me how to restructure the content to match user psychology.
If it involves Deep Tech, provide the code or config fixes.
Ensure the solution is future-proof for the AI Search era."#,
        title = rec.title,
        category = rec.category,
        description = rec.description,
        step = rec.actionable_step,
    )
}
