//! Fixture content for the demo. Claire is entirely scripted: every answer
//! below is canned copy keyed by conversation mode and policy. There is no
//! model behind this and there should never appear to be one outside the UI.

use crate::dates::PolicyTerm;
use crate::script::{ChatMode, PolicyId};

/// One scripted conversational turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatPrompt {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A single coverage line within a policy (limit + deductible as display text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageLine {
    pub name: &'static str,
    pub limit: &'static str,
    pub deductible: &'static str,
}

/// One of the mock policies Claire has "analyzed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyGroup {
    pub id: PolicyId,
    pub kind: &'static str,
    pub carrier: &'static str,
    /// Carrier-assigned number without the year (the year comes from the
    /// policy's effective date, see `dates::policy_number`).
    pub number_prefix: &'static str,
    pub number_suffix: &'static str,
    pub term: PolicyTerm,
    pub coverages: &'static [CoverageLine],
}

/// Where Claire got a piece of context from (the "sources" pills).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextSource {
    pub label: &'static str,
    pub details: &'static str,
    pub integration: &'static str,
}

/// A line shown during the simulated policy-analysis step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingMessage {
    pub text: &'static str,
    pub delay_ms: u64,
}

pub const BUSINESS_NAME: &str = "Rosario's Italian Kitchen";

pub const CTA_PHONE: &str = "(672) 203-6730";
pub const CTA_EMAIL: &str = "claire@claritylabs.inc";

/// Reactions cycle through this list, one per answered question.
pub const REACTION_EMOJI: &[&str] = &["\u{2764}\u{FE0F}", "\u{1F44D}", "\u{1F64C}", "\u{2705}"];

pub const PROCESSING_MESSAGES: &[ProcessingMessage] = &[
    ProcessingMessage { text: "Analyzing 4 policy documents...", delay_ms: 0 },
    ProcessingMessage { text: "Extracting coverage details...", delay_ms: 800 },
    ProcessingMessage { text: "Cross-referencing limits and deductibles...", delay_ms: 1600 },
    ProcessingMessage { text: "Done.", delay_ms: 2200 },
];

pub const CONTEXT_SOURCES: &[ContextSource] = &[
    ContextSource {
        label: "Lease",
        details: "Lease with Greystar Properties \u{00b7} 412 Congress Ave \u{00b7} Landlord requires AI as certificate holder \u{00b7} $8,500/mo rent",
        integration: "Greystar tenant portal MCP",
    },
    ContextSource {
        label: "Business Profile",
        details: "Rosario's Italian Kitchen \u{00b7} Full-service restaurant w/ bar \u{00b7} 22 employees \u{00b7} Est. 2019 \u{00b7} Serves alcohol (liquor license active)",
        integration: "California Secretary of State Business Search",
    },
    ContextSource {
        label: "QuickBooks",
        details: "$1.8M annual revenue \u{00b7} $42K/mo payroll \u{00b7} 2 delivery vehicles on books",
        integration: "QuickBooks Online API",
    },
];

pub const POLICY_GROUPS: &[PolicyGroup] = &[
    PolicyGroup {
        id: PolicyId::Gl,
        kind: "General Liability",
        carrier: "Hartford",
        number_prefix: "CGL",
        number_suffix: "88412",
        term: PolicyTerm::NextRenewal,
        coverages: &[
            CoverageLine { name: "Each Occurrence", limit: "$1,000,000", deductible: "$2,500" },
            CoverageLine { name: "General Aggregate", limit: "$2,000,000", deductible: "\u{2014}" },
            CoverageLine { name: "Products/Completed Ops", limit: "$2,000,000", deductible: "\u{2014}" },
            CoverageLine { name: "Liquor Liability", limit: "$1,000,000", deductible: "$5,000" },
        ],
    },
    PolicyGroup {
        id: PolicyId::Cp,
        kind: "Commercial Property",
        carrier: "Travelers",
        number_prefix: "CP",
        number_suffix: "55109",
        term: PolicyTerm::Anniversary { month: 3, day: 15 },
        coverages: &[
            CoverageLine { name: "Building", limit: "$850,000", deductible: "$5,000" },
            CoverageLine { name: "BPP (Contents)", limit: "$250,000", deductible: "$2,500" },
            CoverageLine { name: "Business Income", limit: "$150,000", deductible: "72-hr waiting" },
        ],
    },
    PolicyGroup {
        id: PolicyId::Wc,
        kind: "Workers' Compensation",
        carrier: "EMPLOYERS",
        number_prefix: "WC",
        number_suffix: "71003",
        term: PolicyTerm::Anniversary { month: 6, day: 8 },
        coverages: &[
            CoverageLine { name: "Part One (Statutory)", limit: "Statutory", deductible: "\u{2014}" },
            CoverageLine { name: "Employers Liability", limit: "$500,000", deductible: "\u{2014}" },
        ],
    },
    PolicyGroup {
        id: PolicyId::Ca,
        kind: "Commercial Auto",
        carrier: "Progressive",
        number_prefix: "CA",
        number_suffix: "30287",
        term: PolicyTerm::Anniversary { month: 4, day: 22 },
        coverages: &[
            CoverageLine { name: "Liability", limit: "$1,000,000 CSL", deductible: "$1,000" },
            CoverageLine { name: "Uninsured Motorist", limit: "$1,000,000", deductible: "\u{2014}" },
        ],
    },
];

/// Look up the coverage table for a policy.
pub fn policy_group(policy: PolicyId) -> &'static PolicyGroup {
    // POLICY_GROUPS holds every PolicyId variant; the fallback keeps this total.
    POLICY_GROUPS
        .iter()
        .find(|g| g.id == policy)
        .unwrap_or(&POLICY_GROUPS[0])
}

/// Opening message for a conversation mode.
pub fn greeting_for(mode: ChatMode) -> &'static str {
    match mode {
        ChatMode::Contact => "Hi! I've analyzed your policies. What can I help with?",
        ChatMode::Renew => "Hi! Your General Liability policy renews in two weeks. Want to walk through it?",
        ChatMode::Overview => "Hi! Ask me anything about what your policies actually cover.",
        ChatMode::Premiums => "Hi! I can break down what you're paying and where it's going.",
        ChatMode::Integrations => "Hi! I pull context from your lease, books, and filings. Ask me where anything came from.",
    }
}

/// Ordered question/answer pairs for a (mode, policy) pair.
///
/// Not every mode has per-policy copy; anything without a dedicated set falls
/// back to the mode's General Liability set, which is the documented default.
pub fn prompts_for(mode: ChatMode, policy: PolicyId) -> &'static [ChatPrompt] {
    match (mode, policy) {
        (ChatMode::Contact, _) => CONTACT_PROMPTS,
        (ChatMode::Renew, _) => RENEW_PROMPTS,
        (ChatMode::Overview, PolicyId::Cp) => OVERVIEW_CP_PROMPTS,
        (ChatMode::Overview, PolicyId::Wc) => OVERVIEW_WC_PROMPTS,
        (ChatMode::Overview, PolicyId::Ca) => OVERVIEW_CA_PROMPTS,
        (ChatMode::Overview, _) => OVERVIEW_GL_PROMPTS,
        (ChatMode::Premiums, PolicyId::Ca) => PREMIUMS_CA_PROMPTS,
        (ChatMode::Premiums, _) => PREMIUMS_GL_PROMPTS,
        (ChatMode::Integrations, _) => INTEGRATIONS_PROMPTS,
    }
}

const CONTACT_PROMPTS: &[ChatPrompt] = &[
    ChatPrompt {
        question: "Can you get proof of insurance for our lease renewal?",
        answer: "Your Hartford CGL meets Greystar's $1M requirement. I've sent the COI \u{2014} you're all set.",
    },
    ChatPrompt {
        question: "Do we have food liability coverage for Dell?",
        answer: "Yes \u{2014} Hartford CGL covers Products/Completed Ops ($2M) and Liquor Liability ($1M). I can send Dell a COI.",
    },
];

const RENEW_PROMPTS: &[ChatPrompt] = &[
    ChatPrompt {
        question: "Our GL policy expires soon. What do I need to do?",
        answer: "Nothing yet \u{2014} I've already requested the renewal quote from Hartford. Same limits, effective the day your current term ends. I'll flag anything that changes.",
    },
    ChatPrompt {
        question: "Is the premium going up?",
        answer: "Hartford's indication is a 4% increase, mostly from your revenue growth. Still in line with the market \u{2014} I checked two competing carriers and neither beat it at the same limits.",
    },
];

const OVERVIEW_GL_PROMPTS: &[ChatPrompt] = &[
    ChatPrompt {
        question: "What does our general liability policy actually cover?",
        answer: "Bodily injury and property damage claims from your operations \u{2014} $1M per occurrence, $2M aggregate, plus Products/Completed Ops and Liquor Liability since you serve alcohol.",
    },
    ChatPrompt {
        question: "A customer slipped on a wet floor. Are we covered?",
        answer: "Yes \u{2014} that falls under your Hartford CGL, $1M per occurrence with a $2,500 deductible. Document the scene and don't admit fault. I can open the claim with Hartford right now.",
    },
];

const OVERVIEW_CP_PROMPTS: &[ChatPrompt] = &[
    ChatPrompt {
        question: "Does our property policy cover the new kitchen equipment?",
        answer: "Yes \u{2014} it's covered under BPP on your Travelers policy, up to $250,000. If the new equipment is a big purchase, you may be getting close to that limit. Want me to check?",
    },
    ChatPrompt {
        question: "What happens if we have to close after a kitchen fire?",
        answer: "Business Income coverage kicks in after a 72-hour waiting period, up to $150,000 \u{2014} lost revenue and ongoing expenses while you rebuild.",
    },
];

const OVERVIEW_WC_PROMPTS: &[ChatPrompt] = &[
    ChatPrompt {
        question: "What does workers' comp cover if a cook gets burned?",
        answer: "Part One covers their medical care and lost wages at the statutory rate \u{2014} no limit. Employers Liability adds $500,000 if they sue beyond the statutory claim.",
    },
    ChatPrompt {
        question: "Are part-time staff covered too?",
        answer: "Yes \u{2014} all 22 employees on payroll are covered, full-time and part-time. California doesn't distinguish for workers' comp.",
    },
];

const OVERVIEW_CA_PROMPTS: &[ChatPrompt] = &[
    ChatPrompt {
        question: "Are both delivery vehicles on the auto policy?",
        answer: "Yes \u{2014} both vehicles on your books are scheduled on the Progressive policy, $1M combined single limit with a $1,000 deductible.",
    },
    ChatPrompt {
        question: "What if a driver gets hit by someone without insurance?",
        answer: "You carry Uninsured Motorist at $1,000,000 \u{2014} it steps in for injuries your driver sustains when the other party can't pay.",
    },
];

const PREMIUMS_GL_PROMPTS: &[ChatPrompt] = &[
    ChatPrompt {
        question: "What are we paying across all our policies?",
        answer: "About $2,140/month across the four policies. GL is the biggest line at $860/month, driven by the liquor liability endorsement.",
    },
    ChatPrompt {
        question: "Any way to bring the GL premium down?",
        answer: "Raising your per-occurrence deductible from $2,500 to $5,000 would save roughly 8%. Given your claim history \u{2014} zero claims since 2019 \u{2014} that's a reasonable trade.",
    },
];

const PREMIUMS_CA_PROMPTS: &[ChatPrompt] = &[
    ChatPrompt {
        question: "Why did the auto premium jump this year?",
        answer: "Progressive repriced commercial auto statewide \u{2014} your rate went up 11% with no claims on your record. I can shop it at renewal; two carriers look competitive.",
    },
    ChatPrompt {
        question: "Would dropping one delivery vehicle lower it much?",
        answer: "Removing a scheduled vehicle saves about $95/month. If the second van is mostly idle, that's worth a look \u{2014} I can model it against your delivery volume from QuickBooks.",
    },
];

const INTEGRATIONS_PROMPTS: &[ChatPrompt] = &[
    ChatPrompt {
        question: "Where did you get our lease requirements from?",
        answer: "From the Greystar tenant portal \u{2014} your lease at 412 Congress Ave requires the landlord listed as certificate holder with $1M per-occurrence GL. I verify it each time the lease updates.",
    },
    ChatPrompt {
        question: "Can you pull payroll for the workers' comp audit?",
        answer: "Already have it \u{2014} QuickBooks shows $42K/month payroll across 22 employees. I'll pre-fill the EMPLOYERS audit form and flag anything that doesn't reconcile.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_has_prompts_and_greeting() {
        for mode in ChatMode::ALL {
            assert!(!greeting_for(mode).is_empty());
            for policy in PolicyId::ALL {
                assert!(!prompts_for(mode, policy).is_empty());
            }
        }
    }

    #[test]
    fn every_policy_has_a_group() {
        for policy in PolicyId::ALL {
            assert_eq!(policy_group(policy).id, policy);
        }
    }

    #[test]
    fn processing_delays_never_decrease() {
        // The replay sleeps for the gap between consecutive entries.
        let mut previous = 0;
        for processing in PROCESSING_MESSAGES {
            assert!(processing.delay_ms >= previous);
            previous = processing.delay_ms;
        }
    }
}
