//! Word lists backing the rule-based recognizer. All entries lowercase.

/// Countries, regions, US states and major cities.
pub(crate) const LOCATIONS: &[&str] = &[
    // Countries and country shorthands
    "afghanistan", "albania", "algeria", "argentina", "armenia", "australia", "austria",
    "azerbaijan", "bahrain", "bangladesh", "belarus", "belgium", "bolivia", "bosnia", "brazil",
    "britain", "great britain", "bulgaria", "cambodia", "cameroon", "canada", "chad", "chile",
    "china", "colombia", "congo", "costa rica", "croatia", "cuba", "cyprus", "czech republic",
    "denmark", "ecuador", "egypt", "el salvador", "england", "estonia", "ethiopia", "finland",
    "france", "georgia", "germany", "ghana", "greece", "guatemala", "guinea", "haiti",
    "honduras", "hong kong", "hungary", "iceland", "india", "indonesia", "iran", "iraq",
    "ireland", "israel", "italy", "jamaica", "japan", "jordan", "kazakhstan", "kenya", "kosovo",
    "kuwait", "latvia", "lebanon", "libya", "lithuania", "luxembourg", "malaysia", "mali",
    "mexico", "moldova", "mongolia", "morocco", "mozambique", "myanmar", "nepal", "netherlands",
    "new zealand", "nicaragua", "niger", "nigeria", "north korea", "norway", "oman", "pakistan",
    "palestine", "panama", "paraguay", "peru", "philippines", "poland", "portugal", "qatar",
    "romania", "russia", "rwanda", "saudi arabia", "scotland", "senegal", "serbia", "singapore",
    "slovakia", "slovenia", "somalia", "south africa", "south korea", "spain", "sri lanka",
    "sudan", "south sudan", "sweden", "switzerland", "syria", "taiwan", "tanzania", "thailand",
    "tunisia", "turkey", "uganda", "ukraine", "united arab emirates", "united kingdom",
    "united states", "united states of america", "america", "uruguay", "uzbekistan",
    "venezuela", "vietnam", "wales", "yemen", "zambia", "zimbabwe", "us", "u.s.", "usa",
    "u.s.a.", "uk", "u.k.", "uae",
    // Regions
    "gaza", "west bank", "crimea", "donbas", "kashmir", "tibet", "middle east", "europe",
    "asia", "africa", "latin america", "siberia", "balkans", "caribbean",
    // US states
    "alabama", "alaska", "arizona", "arkansas", "california", "colorado", "connecticut",
    "delaware", "florida", "hawaii", "idaho", "illinois", "indiana", "iowa", "kansas",
    "kentucky", "louisiana", "maine", "maryland", "massachusetts", "michigan", "minnesota",
    "mississippi", "missouri", "montana", "nebraska", "nevada", "new hampshire", "new jersey",
    "new mexico", "new york", "north carolina", "north dakota", "ohio", "oklahoma", "oregon",
    "pennsylvania", "rhode island", "south carolina", "south dakota", "tennessee", "texas",
    "utah", "vermont", "virginia", "washington", "west virginia", "wisconsin", "wyoming",
    "puerto rico",
    // Cities
    "amsterdam", "ankara", "athens", "atlanta", "baghdad", "baltimore", "bangkok", "beijing",
    "beirut", "berlin", "boston", "brussels", "budapest", "buenos aires", "cairo", "caracas",
    "chicago", "dallas", "damascus", "delhi", "new delhi", "denver", "detroit", "doha",
    "dubai", "dublin", "geneva", "havana", "houston", "istanbul", "jakarta", "jerusalem",
    "johannesburg", "kabul", "karachi", "kharkiv", "kyiv", "kiev", "lagos", "las vegas",
    "lisbon", "london", "los angeles", "madrid", "manila", "melbourne", "miami", "milan",
    "minsk", "montreal", "moscow", "mumbai", "munich", "nairobi", "new orleans", "new york city",
    "odesa", "oslo", "ottawa", "paris", "philadelphia", "phoenix", "pittsburgh", "prague",
    "pyongyang", "rome", "san francisco", "santiago", "sao paulo", "seattle", "seoul",
    "shanghai", "stockholm", "sydney", "taipei", "tehran", "tel aviv", "tokyo",
    "toronto", "vancouver", "vienna", "warsaw", "washington d.c.",
];

/// Locations that double as common words or names. Only matched when
/// written capitalized.
pub(crate) const AMBIGUOUS_LOCATIONS: &[&str] = &[
    "america", "chad", "china", "georgia", "guinea", "jordan", "mali", "niger", "oman",
    "phoenix", "turkey", "us", "virginia", "wales", "washington",
];

/// Organizations recognized by full name or acronym.
pub(crate) const KNOWN_ORGANIZATIONS: &[&str] = &[
    "associated press", "ap", "reuters", "bbc", "cnn", "fox news", "nbc", "cbs", "abc news",
    "msnbc", "npr", "new york times", "washington post", "wall street journal", "politico",
    "congress", "senate", "pentagon", "white house", "kremlin", "supreme court",
    "federal reserve", "fed", "justice department", "state department", "treasury",
    "united nations", "un", "u.n.", "nato", "eu", "european union", "european commission",
    "who", "world health organization", "imf", "world bank", "opec", "fbi", "cia", "nsa",
    "irs", "epa", "fda", "cdc", "dhs", "doj", "gop", "hamas", "hezbollah", "taliban",
    "google", "apple", "microsoft", "amazon", "meta", "facebook", "tesla", "twitter",
    "boeing", "pfizer", "openai", "general motors",
];

/// Trailing words that make a capitalized span an organization.
pub(crate) const ORGANIZATION_SUFFIXES: &[&str] = &[
    "administration", "agency", "airlines", "alliance", "association", "authority", "bank",
    "board", "bureau", "co", "co.", "coalition", "college", "commission", "committee",
    "company", "corp", "corp.", "corporation", "council", "court", "department", "foundation",
    "group", "inc", "inc.", "institute", "league", "llc", "ltd", "ltd.", "ministry", "network",
    "news", "office", "organization", "parliament", "party", "police", "post", "press",
    "service", "times", "union", "university",
];

/// Leading words that make a `X of Y` span an organization.
pub(crate) const ORGANIZATION_PREFIXES: &[&str] = &[
    "bank", "board", "bureau", "college", "department", "ministry", "office", "university",
];

/// Honorifics and offices that mark the following name as a person.
pub(crate) const PERSON_TITLES: &[&str] = &[
    "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "dr", "dr.", "prof", "prof.", "sen", "sen.",
    "senator", "rep", "rep.", "representative", "gov", "gov.", "governor", "president",
    "vice", "prime", "minister", "chancellor", "secretary", "speaker", "mayor", "judge",
    "justice", "gen", "gen.", "general", "king", "queen", "prince", "princess", "pope",
    "chairman", "chairwoman", "ceo", "leader", "sir", "dame", "lt.", "col.", "sgt.",
];

/// Common given names used to spot person spans without a title.
pub(crate) const FIRST_NAMES: &[&str] = &[
    "adam", "alexander", "alexandria", "amy", "andrew", "angela", "anthony", "barack",
    "ben", "benjamin", "bernie", "bill", "bob", "boris", "brian", "charles", "chris",
    "christopher", "chuck", "daniel", "david", "donald", "elizabeth", "elon", "emmanuel",
    "emily", "eric", "gavin", "george", "hillary", "jack", "james", "jane", "jd", "jeff",
    "jennifer", "jill", "jim", "joe", "john", "jon", "joseph", "josh", "justin", "kamala",
    "karen", "keir", "kevin", "kim", "lindsey", "lisa", "marco", "maria", "mark", "mary",
    "matt", "michael", "mike", "mitch", "nancy", "narendra", "nikki", "olaf", "paul", "pete",
    "peter", "rishi", "robert", "ron", "sarah", "scott", "steve", "steven", "susan", "ted",
    "thomas", "tim", "tom", "vladimir", "volodymyr", "william", "xi",
];

/// Words trimmed from the edges of a capitalized span: function words,
/// days and months.
pub(crate) const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "it", "its", "he", "she", "they",
    "we", "i", "you", "his", "her", "their", "our", "but", "and", "or", "so", "if", "when",
    "while", "after", "before", "as", "at", "in", "on", "for", "from", "to", "with", "by",
    "of", "yet", "still", "also", "however", "meanwhile", "who", "what", "where", "why",
    "how", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

/// Nationality and party adjectives; never part of a person name.
pub(crate) const DEMONYMS: &[&str] = &[
    "american", "americans", "british", "chinese", "democrat", "democrats", "democratic",
    "european", "french", "german", "israeli", "palestinian", "republican", "republicans",
    "russian", "ukrainian",
];

/// Lowercase words allowed inside a capitalized span (`Bank of America`).
pub(crate) const SPAN_CONNECTORS: &[&str] = &["of", "for", "on", "de", "&"];
