//! Built-in theme text.
//!
//! Axis rows are keyed by the north node's sign (the south node sits in the
//! opposite sign). Columns: sign, south_title, south, north_title, north,
//! bridge, motto.

pub(crate) const AXES: [[&str; 7]; 12] = [
    [
        "Aries",
        "Node in Libra: life through the other",
        "You know how to read a room, keep the peace and shape yourself to what a partner needs. The cost is a self that waits for permission.",
        "North Node in Aries: the courage to begin",
        "acting on your own impulse, naming what you want and starting before you feel ready",
        "From harmony bought by self-erasure to honest initiative that still respects others.",
        "Act first, then adjust.",
    ],
    [
        "Taurus",
        "Node in Scorpio: living in crisis",
        "Intensity feels like home: merging, testing loyalty, tearing down and rebuilding. Calm can feel suspicious.",
        "North Node in Taurus: building what lasts",
        "simple pleasures, steady effort, your own values and resources, and trusting that peace is not emptiness",
        "From constant transformation to patient, grounded growth.",
        "Slow is strong.",
    ],
    [
        "Gemini",
        "Node in Sagittarius: the one who already knows",
        "Big truths, grand beliefs and confident answers come easily. Listening can feel like losing.",
        "North Node in Gemini: the curious student",
        "asking questions, hearing many points of view, staying with details and conversations without needing to win",
        "From preaching a single truth to learning from every voice.",
        "Ask one more question.",
    ],
    [
        "Cancer",
        "Node in Capricorn: the one in charge",
        "Status, duty and control have been your armour. You are good at carrying the load and bad at being carried.",
        "North Node in Cancer: the home within",
        "feeling before managing, tending your inner life and letting close people care for you",
        "From achievement as worth to belonging as worth.",
        "Let yourself be held.",
    ],
    [
        "Leo",
        "Node in Aquarius: the detached observer",
        "You belong to the group and the idea, at a safe distance from your own heart. Being ordinary in a crowd feels safe.",
        "North Node in Leo: the open heart on stage",
        "creative self-expression, joy, play and the risk of being seen as an individual",
        "From safe detachment to wholehearted self-expression.",
        "Shine without apology.",
    ],
    [
        "Virgo",
        "Node in Pisces: drifting and dissolving",
        "You sense everything and merge with it, escaping into dreams, rescue or vagueness when life asks for form.",
        "North Node in Virgo: sacred order",
        "daily routines, practical service, clear boundaries and caring for the body and the details",
        "From boundless sensitivity to compassion given a working form.",
        "Small daily steps.",
    ],
    [
        "Libra",
        "Node in Aries: the lone warrior",
        "Self-reliance and speed are second nature. You fight your way through and rarely stop to ask what the other person needs.",
        "North Node in Libra: partnership and balance",
        "cooperation, diplomacy, fairness and letting relationships shape you",
        "From going it alone to meeting life together.",
        "Together is a skill.",
    ],
    [
        "Scorpio",
        "Node in Taurus: holding on",
        "Comfort, possessions and the familiar keep you safe. Change is resisted long after it is due.",
        "North Node in Scorpio: deep transformation",
        "sharing power and resources, letting go, facing what is hidden and trusting renewal",
        "From security through holding on to strength through release.",
        "Let it die, let it grow.",
    ],
    [
        "Sagittarius",
        "Node in Gemini: scattered information",
        "You collect facts, opinions and contacts, juggling many small directions and never committing to one.",
        "North Node in Sagittarius: the seeker of meaning",
        "a guiding philosophy, travel of body and mind, faith in a larger purpose and speaking your truth",
        "From endless detail to a meaning that ties it together.",
        "Follow the bigger picture.",
    ],
    [
        "Capricorn",
        "Node in Cancer: the safe nest",
        "Family, mood and the need to be looked after have kept you close to home and close to old feelings.",
        "North Node in Capricorn: the responsible adult",
        "self-discipline, long-term goals, public responsibility and becoming your own authority",
        "From emotional dependence to mature, chosen responsibility.",
        "Build your own foundation.",
    ],
    [
        "Aquarius",
        "Node in Leo: the centre of attention",
        "Recognition and personal drama have been the fuel. Life tends to revolve around being special.",
        "North Node in Aquarius: the friend of the future",
        "community, shared ideals, innovation and contributing to something larger than your own story",
        "From personal applause to collective purpose.",
        "Serve the circle.",
    ],
    [
        "Pisces",
        "Node in Virgo: the anxious perfectionist",
        "Analysing, fixing and criticising keep chaos away. Nothing is ever quite good enough, including you.",
        "North Node in Pisces: trust and surrender",
        "faith, imagination, spiritual practice and accepting life without controlling every detail",
        "From control through analysis to trust in the flow of life.",
        "Let go and trust.",
    ],
];

/// Columns: title, sn, nn, key. Row `i` is house `i + 1`.
pub(crate) const HOUSES: [[&str; 4]; 12] = [
    [
        "self and identity",
        "Defining yourself on your own terms, fighting to stay independent.",
        "Growth comes through claiming your own path and a clear sense of self.",
        "Be yourself",
    ],
    [
        "resources and self-worth",
        "Measuring safety by what you own and what you can hold on to.",
        "Growth comes through building your own values, skills and income.",
        "Build value",
    ],
    [
        "learning and communication",
        "Staying busy with talk, errands and information from the near world.",
        "Growth comes through learning, writing, teaching and everyday exchange.",
        "Speak and learn",
    ],
    [
        "home and roots",
        "Retreating into family, the past and private emotional life.",
        "Growth comes through creating a true home and an inner base.",
        "Root yourself",
    ],
    [
        "creativity and joy",
        "Seeking attention, romance and applause as proof of worth.",
        "Growth comes through play, creation, children and heartfelt self-expression.",
        "Create with joy",
    ],
    [
        "work and daily service",
        "Getting lost in duties, routines and fixing what is wrong.",
        "Growth comes through useful work, health and meaningful routines.",
        "Serve daily",
    ],
    [
        "partnership",
        "Defining yourself through partners and their expectations.",
        "Growth comes through committed one-to-one relationships as equals.",
        "Partner up",
    ],
    [
        "shared power and transformation",
        "Entangling in crises, debts and other people's resources.",
        "Growth comes through deep bonds, shared resources and inner change.",
        "Transform",
    ],
    [
        "meaning and horizons",
        "Chasing beliefs, distant places and abstract truths.",
        "Growth comes through study, travel and a philosophy you live by.",
        "Expand",
    ],
    [
        "career and public role",
        "Carrying status, ambition and the weight of other people's expectations.",
        "Growth comes through a public calling and earned authority.",
        "Lead",
    ],
    [
        "community and ideals",
        "Hiding in groups, causes and the comfort of the crowd.",
        "Growth comes through friendship, networks and shared hopes for the future.",
        "Connect",
    ],
    [
        "solitude and the unseen",
        "Withdrawing, sacrificing yourself or escaping from the world.",
        "Growth comes through retreat, spirituality and quiet inner work.",
        "Go within",
    ],
];
