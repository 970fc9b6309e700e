//! Actor vocabulary: `(label, fragments)` rows for each side.
//!
//! Fragments are case-insensitive regex sources. A literal space stands for
//! any run of whitespace. Labels are colon-separated paths from generic to
//! specific; extraction walks them in descending label order, so a specific
//! entry must sort after (i.e. be tried before) every generic entry whose
//! fragment could match inside it.

pub type ActorRow = (&'static str, &'static [&'static str]);

// ── Government ──

pub(crate) const GOVERNMENT: &[ActorRow] = &[
    ("Crown", &["the Crown", "(?:Her|His) Majesty", "the Sovereign"]),
    ("EU: Commission", &["European Commission", "the Commission of the European Communities"]),
    ("EU: Council", &["Council of the European Union"]),
    ("EU: Member State", &["Member States?"]),
    // Agencies
    ("Gvt: Agency:", &["agency", "agencies"]),
    ("Gvt: Agency: Environment Agency", &["Environment Agency"]),
    ("Gvt: Agency: Food Standards Agency", &["Food Standards Agency", "Food Standards Scotland"]),
    ("Gvt: Agency: Health and Safety Executive", &["Health and Safety Executive", "HSE"]),
    (
        "Gvt: Agency: Health and Safety Executive for Northern Ireland",
        &["Health and Safety Executive for Northern Ireland", "HSENI"],
    ),
    ("Gvt: Agency: Historic England", &["Historic England", "Historic Environment Scotland"]),
    ("Gvt: Agency: Marine Management Organisation", &["Marine Management Organisation"]),
    ("Gvt: Agency: Natural England", &["Natural England"]),
    ("Gvt: Agency: Natural Resources Wales", &["Natural Resources Wales"]),
    ("Gvt: Agency: Northern Ireland Environment Agency", &["Northern Ireland Environment Agency"]),
    ("Gvt: Agency: Office for Nuclear Regulation", &["Office for Nuclear Regulation", "ONR"]),
    ("Gvt: Agency: Office of Rail and Road", &["Office of Rail and Road", "Office of Rail Regulation"]),
    (
        "Gvt: Agency: Scottish Environment Protection Agency",
        &["Scottish Environment Protection Agency", "SEPA"],
    ),
    // Authorities
    ("Gvt: Authority:", &["authority", "authorities"]),
    ("Gvt: Authority: Appropriate", &["appropriate authorit(?:y|ies)"]),
    ("Gvt: Authority: Civil Aviation", &["Civil Aviation Authority"]),
    ("Gvt: Authority: Coal", &["Coal Authority"]),
    ("Gvt: Authority: Competent", &["competent authorit(?:y|ies)"]),
    (
        "Gvt: Authority: Enforcing",
        &["enforcing authorit(?:y|ies)", "enforcement authorit(?:y|ies)"],
    ),
    ("Gvt: Authority: Harbour", &["harbour authorit(?:y|ies)"]),
    ("Gvt: Authority: Health", &["health authorit(?:y|ies)", "health boards?", "NHS trusts?"]),
    ("Gvt: Authority: Highway", &["highway authorit(?:y|ies)", "roads authorit(?:y|ies)"]),
    ("Gvt: Authority: Licensing", &["licensing authorit(?:y|ies)"]),
    (
        "Gvt: Authority: Local",
        &[
            "local authorit(?:y|ies)",
            "(?:county|district|borough|city|parish|community|town|unitary) councils?",
            "London borough councils?",
            "Common Council of the City of London",
        ],
    ),
    ("Gvt: Authority: National Park", &["National Park authorit(?:y|ies)"]),
    ("Gvt: Authority: Navigation", &["navigation authorit(?:y|ies)"]),
    ("Gvt: Authority: Oil and Gas", &["Oil and Gas Authority", "North Sea Transition Authority"]),
    ("Gvt: Authority: Planning", &["(?:local )?(?:mineral )?planning authorit(?:y|ies)"]),
    ("Gvt: Authority: Port Health", &["port health authorit(?:y|ies)"]),
    ("Gvt: Authority: Public", &["public authorit(?:y|ies)", "public bod(?:y|ies)"]),
    ("Gvt: Authority: Regulator", &["regulators?", "regulatory authorit(?:y|ies)"]),
    (
        "Gvt: Authority: Waste",
        &["waste (?:regulation|collection|disposal|planning) authorit(?:y|ies)"],
    ),
    ("Gvt: Body: Advisory", &["advisory (?:committees?|councils?|bod(?:y|ies))"]),
    (
        "Gvt: Commissioners",
        &[
            "Commissioners for (?:Her|His) Majesty['’]s Revenue and Customs",
            "Commissioners of Customs and Excise",
            "HMRC",
        ],
    ),
    ("Gvt: Coroner", &["coroners?"]),
    // Departments
    ("Gvt: Department:", &["government departments?"]),
    (
        "Gvt: Department: DAERA",
        &["Department of Agriculture, Environment and Rural Affairs"],
    ),
    ("Gvt: Department: Economy", &["Department for the Economy"]),
    ("Gvt: Department: Environment", &["Department of the Environment"]),
    ("Gvt: Department: Infrastructure", &["Department for Infrastructure"]),
    ("Gvt: Department: Transport", &["Department for Transport"]),
    // Devolved administrations
    ("Gvt: Devolved Admin: Northern Ireland Executive", &["Northern Ireland Executive"]),
    ("Gvt: Devolved Admin: Scottish Government", &["Scottish Government", "Scottish Executive"]),
    ("Gvt: Devolved Admin: Welsh Government", &["Welsh Government", "Welsh Assembly Government"]),
    // Emergency services
    (
        "Gvt: Emergency Services: Fire",
        &["fire and rescue authorit(?:y|ies)", "fire (?:and rescue )?services?", "fire authorit(?:y|ies)"],
    ),
    ("Gvt: Emergency Services: Police", &["police"]),
    // Judiciary
    ("Gvt: Judiciary: Court", &["courts?"]),
    ("Gvt: Judiciary: Court: Crown Court", &["Crown Court"]),
    ("Gvt: Judiciary: Court: High Court", &["High Court"]),
    ("Gvt: Judiciary: Court: Magistrates", &["magistrates['’]? courts?"]),
    ("Gvt: Judiciary: Court: Sheriff", &["sheriff courts?", "sheriffs?"]),
    ("Gvt: Judiciary: Justice of the Peace", &["justices? of the peace"]),
    ("Gvt: Judiciary: Tribunal", &["tribunals?"]),
    ("Gvt: Judiciary: Tribunal: First-tier", &["First-tier Tribunal"]),
    ("Gvt: Judiciary: Tribunal: Upper", &["Upper Tribunal"]),
    ("Gvt: Lord Advocate", &["Lord Advocate"]),
    // Ministers
    ("Gvt: Minister:", &["Ministers? of the Crown", "ministers?"]),
    ("Gvt: Minister: Northern Ireland", &["Northern Ireland Ministers?"]),
    ("Gvt: Minister: Scottish Ministers", &["Scottish Ministers"]),
    ("Gvt: Minister: Welsh Ministers", &["Welsh Ministers"]),
    ("Gvt: Ombudsman", &["ombudsm[ae]n"]),
    // Officers
    ("Gvt: Officer:", &["officers?"]),
    ("Gvt: Officer: Authorised", &["authori[sz]ed officers?"]),
    ("Gvt: Officer: Enforcement", &["enforcement officers?"]),
    ("Gvt: Officer: Environmental Health", &["environmental health officers?"]),
    ("Gvt: Officer: Inspector", &["inspectors?"]),
    ("Gvt: Officer: Inspector: Chief", &["chief inspectors?", "HM Chief Inspector"]),
    ("Gvt: Officer: Medical", &["employment medical advis[eo]rs?", "medical officers?"]),
    ("Gvt: Officer: Police", &["police officers?", "constables?"]),
    ("Gvt: Officer: Proper", &["proper officers?"]),
    // Legislatures
    ("Gvt: Parliament:", &["Parliament", "House of Commons", "House of Lords"]),
    ("Gvt: Parliament: Northern Ireland Assembly", &["Northern Ireland Assembly"]),
    ("Gvt: Parliament: Scottish", &["Scottish Parliament"]),
    ("Gvt: Parliament: Senedd", &["Senedd(?: Cymru)?", "National Assembly for Wales"]),
    ("Gvt: Procurator Fiscal", &["procurators? fiscal"]),
    ("Gvt: Registrar", &["Registrar of Companies", "registrars?"]),
    ("Gvt: Secretary of State", &["Secretary of State", "Secretaries of State"]),
    ("Gvt: Treasury", &["(?:Her|His) Majesty['’]s Treasury", "HM Treasury", "the Treasury"]),
];

// ── Governed ──

pub(crate) const GOVERNED: &[ActorRow] = &[
    ("Ind: Applicant", &["applicants?"]),
    ("Ind: Appellant", &["appellants?"]),
    ("Ind: Consumer", &["consumers?"]),
    ("Ind: Crew", &["crew members?", "members? of the crew"]),
    ("Ind: Customer", &["customers?"]),
    ("Ind: Diver", &["divers?"]),
    ("Ind: Driver", &["drivers?"]),
    ("Ind: Employee", &["employees?"]),
    ("Ind: Harbour Master", &["harbour masters?"]),
    ("Ind: Holder", &["holders?"]),
    (
        "Ind: Holder: Licence",
        &[
            "(?:licence|permit|certificate|authorisation|consent) holders?",
            "holders? of (?:a|an|the|any) (?:licence|permit|certificate|authorisation|consent)",
        ],
    ),
    ("Ind: Individual", &["individuals?"]),
    ("Ind: Manager", &["managers?"]),
    ("Ind: Manager: Mine", &["mine managers?", "managers? of (?:a|the|any) mine"]),
    ("Ind: Master", &["masters? of (?:a|the|any) (?:ship|vessel)", "ship['’]?s masters?"]),
    ("Ind: Passenger", &["passengers?"]),
    ("Ind: Person", &["persons?"]),
    ("Ind: Person: Accountable", &["accountable persons?"]),
    ("Ind: Person: Appointed", &["appointed persons?"]),
    ("Ind: Person: Authorised", &["authori[sz]ed persons?"]),
    ("Ind: Person: Competent", &["competent persons?"]),
    ("Ind: Person: Disabled", &["disabled persons?"]),
    ("Ind: Person: In Control", &["persons? (?:in|having) control of"]),
    ("Ind: Person: Relevant", &["relevant persons?"]),
    ("Ind: Person: Responsible", &["responsible persons?"]),
    ("Ind: Person: Self-employed", &["self-employed persons?", "self-employed individuals?"]),
    ("Ind: Person: Young", &["young persons?"]),
    ("Ind: Pilot", &["pilots?"]),
    ("Ind: Practitioner: Medical", &["(?:registered )?medical practitioners?", "doctors?"]),
    ("Ind: Representative", &["representatives?"]),
    (
        "Ind: Representative: Safety",
        &["(?:employee )?safety representatives?", "representatives? of employee safety"],
    ),
    ("Ind: Seafarer", &["seafarers?"]),
    ("Ind: Supervisor", &["supervisors?"]),
    ("Ind: Trainee", &["trainees?", "apprentices?"]),
    ("Ind: User", &["users?"]),
    ("Ind: User: End", &["end users?", "end-users?"]),
    ("Ind: Visitor", &["visitors?"]),
    ("Ind: Worker", &["workers?"]),
    ("Ind: Worker: Agency", &["agency workers?"]),
    ("Ind: Worker: Night", &["night workers?"]),
    ("Ind: Worker: Young", &["young workers?"]),
    // Organisations
    ("Org: Body Corporate", &["bod(?:y|ies) corporate"]),
    ("Org: Business", &["businesses", "business"]),
    ("Org: Charity", &["charit(?:y|ies)"]),
    ("Org: Company", &["compan(?:y|ies)"]),
    ("Org: Dutyholder", &["duty holders?", "dutyholders?", "duty-holders?"]),
    ("Org: Employer", &["employers?"]),
    ("Org: Farmer", &["farmers?"]),
    ("Org: Firm", &["firms?"]),
    ("Org: Landlord", &["landlords?"]),
    ("Org: Licensee", &["licensees?"]),
    ("Org: Occupier", &["occupiers?"]),
    ("Org: Operator", &["operators?"]),
    ("Org: Operator: Food Business", &["food business operators?"]),
    (
        "Org: Operator: Installation",
        &["installation operators?", "operators? of (?:an?|the|any) installation"],
    ),
    ("Org: Operator: Site", &["site operators?"]),
    (
        "Org: Operator: Vehicle",
        &["vehicle operators?", "operators? of (?:a|the|any) (?:goods )?vehicle"],
    ),
    ("Org: Organisation", &["organi[sz]ations?"]),
    ("Org: Owner", &["owners?"]),
    ("Org: Owner: Land", &["landowners?", "owners? of (?:the|any) land"]),
    ("Org: Owner: Mine", &["mine owners?", "owners? of (?:a|the|any) mine"]),
    ("Org: Owner: Vessel", &["shipowners?", "owners? of (?:a|the|any) (?:ship|vessel)"]),
    ("Org: Partnership", &["limited liability partnerships?", "partnerships?"]),
    ("Org: Tenant", &["tenants?", "lessees?"]),
    ("Org: Trustee", &["trustees?"]),
    ("Org: Undertaker", &["(?:statutory |water |sewerage )?undertakers?"]),
    ("Public", &["the public", "general public"]),
    ("Public: Member", &["members? of the public"]),
    // Supply chain
    ("SC: Agent", &["agents?"]),
    ("SC: Broker", &["brokers?"]),
    ("SC: Carrier", &["carriers?"]),
    (
        "SC: Carrier: Waste",
        &["(?:registered )?waste carriers?", "carriers? of (?:controlled )?waste"],
    ),
    ("SC: Client", &["clients?"]),
    ("SC: Client: Domestic", &["domestic clients?"]),
    ("SC: Consignee", &["consignees?"]),
    ("SC: Consignor", &["consignors?"]),
    ("SC: Contractor", &["contractors?"]),
    ("SC: Contractor: Principal", &["principal contractors?"]),
    ("SC: Contractor: Sub", &["sub-?contractors?"]),
    ("SC: Dealer", &["dealers?"]),
    ("SC: Designer", &["designers?"]),
    ("SC: Designer: Principal", &["principal designers?"]),
    ("SC: Distributor", &["distributors?"]),
    ("SC: Importer", &["importers?"]),
    ("SC: Installer", &["installers?"]),
    ("SC: Keeper", &["keepers?"]),
    ("SC: Manufacturer", &["manufacturers?"]),
    ("SC: Manufacturer: Representative", &["authori[sz]ed representatives?"]),
    ("SC: Packer", &["packers?"]),
    ("SC: Producer", &["producers?"]),
    ("SC: Producer: Waste", &["waste producers?", "producers? of (?:the )?waste"]),
    ("SC: Retailer", &["retailers?"]),
    ("SC: Seller", &["sellers?"]),
    ("SC: Service Provider", &["service providers?"]),
    ("SC: Supplier", &["suppliers?"]),
    ("SC: Transporter", &["transporters?"]),
    // Specialists
    ("Spc: Adviser", &["advis[eo]rs?"]),
    ("Spc: Adviser: Safety", &["(?:health and )?safety advis[eo]rs?"]),
    ("Spc: Assessor", &["assessors?"]),
    ("Spc: Auditor", &["auditors?"]),
    (
        "Spc: Body: Approved",
        &["approved bod(?:y|ies)", "notified bod(?:y|ies)", "conformity assessment bod(?:y|ies)"],
    ),
    ("Spc: Consultant", &["consultants?"]),
    ("Spc: Insurer", &["insurers?"]),
    ("Spc: Laboratory", &["laborator(?:y|ies)"]),
    ("Spc: Trade Union", &["(?:recognised |independent )?trade unions?"]),
    ("Spc: Verifier", &["verifiers?"]),
];

/// Pronoun subjects. Matched last and never removed from the text.
pub(crate) const GOVERNED_PRONOUNS: &[ActorRow] = &[("Ind: Pronoun", &["he", "she"])];

/// Literal phrases that look like actor mentions but are not.
///
/// Longer phrases come before any phrase they contain.
pub(crate) const FALSE_POSITIVES: &[&str] = &[
    "local authority's area",
    "local authority area",
    "area of a local authority",
    "area of the authority",
    "authority's area",
    "authority’s area",
    "without lawful authority",
    "lawful authority",
    "under the authority of",
    "with the authority of",
    "on the authority of",
    "by the authority of",
    "Agency Workers Regulations",
    "Employers' Liability (Compulsory Insurance) Act",
    "Employers’ Liability (Compulsory Insurance) Act",
    "Crown copyright",
];
