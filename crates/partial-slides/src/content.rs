//! The RSEvents walkthrough deck.
//!
//! Fragments are kept byte-for-byte as presented, trailing whitespace and
//! missing final newlines included, since both show up in the compiled slides.

use crate::deck::{Deck, Screen, Topic};

pub fn deck() -> Deck {
    Deck { topics: TOPICS }
}

const TOPICS: &[Topic] = &[
    Topic {
        name: "what-is-rsevents",
        screens: WHAT_IS_RSEVENTS,
    },
    Topic {
        name: "tech-stack",
        screens: TECH_STACK,
    },
    Topic {
        name: "notifications",
        screens: NOTIFICATIONS,
    },
];

const WHAT_IS_RSEVENTS: &[Screen] = &[
    &[
        "# What is RSEvents?\n## Overview\n",
        "`RSEvents` stands for RouterSecure Events, or HomeSecure Events.\n",
        "\nIt's responsible for processing device-related events coming from `HomeSecure`, ",
        "and relaying them other microservices.\n",
        "\nExamples for such microservices: `Notifications`, `Accounts`, and `Buckets` (reader/writer).\n",
    ],
    &[
        "# What is RSEvents?\n## Properties\n",
        "\n- receives events from HomeSecure\n",
        "- interacts with account / device scope\n",
    ],
];

const TECH_STACK: &[Screen] = &[
    &[
        "# Tech Stack - 1/3\n",
        "## google's `Protobuf`\n",
        "- (De)compresses complex data into lightweight bytes array (and back to workable data)\n",
        "  - encryption, faster, cheaper\n",
        "- Auto-generates code based on a pre-defined `.proto` scheme\n",
        "  - can be defined by product or architects (Hagai in our case)\n",
        "- Provides basic validation\n",
        "  - Types and structure of objects\n",
        "  - **Not** as granular as OpenAPI\n",
    ],
    &[
        r#"# Tech Stack - 1/3
## google's `Protobuf` - Example

A protobuf model defined by Hagai:
"#,
        r#"```proto
message DeviceEventLastSeen
{
  MessageBase message = 1;
  string last_seen = 2;
}```
"#,
        "Is sent to RSEvents as:\n",
        r#"```python
b'\nQ\n\n1628071354\x12\x18f18uh-1L2/OY_}zfH0ipxxX?\x1a)\n\x0c94e420fc43e3\x12\x0e__GILAD_USER__\x1a\t__GILAD__\x12\tyesterday'
```
"#,
        "And is unpacked into a normal json:\n",
        r#"```json
{
    "message" {
        "timestamp": "1628071354",
        "trace_id": "f18uh-1L2/OY_}zfH0ipxxX?",
        "device": {
            "device_id": "f18uh-1L2/OY_}zfH0ipxxX?",
            "user_id": "__GILAD_USER__",
            "account_id": "__GILAD__"
        },
    }
    "last_seen": "yesterday"
}
```"#,
    ],
    &[
        "# Tech Stack - 2/3\n## Good ol' Kafka\n",
        "- Consumes and parses the encoded bytestream into a legit JSON\n",
        "- Builds the appropriate `Pydantic` model",
        "        *an appropriate WHAT now?*\n",
        "- Lastly, publishes the model's output to `Notifications`, `Accounts`, and/or `Buckets`.",
    ],
    &[
        "# Tech Stack - 3/3\n## `Pydantic`\n",
        "A python library that plays really well with OpenAPI. \n",
        "- generates class definitions from an OpenAPI scheme, ",
        "which fully validate any received data (according to the scheme rules)\n",
        "- outputs the data back into a range of formats\n",
        "- requires the developer only to define the interface (type and structure), ",
        "while doing the implementation automagically. \n\n",
        "The respective Pydantic model:\n",
        r#"```python3
class DeviceEventLastSeen(pydantic.BaseModel):
    timestamp: str
    trace_id: Optional[Union[str, dict]]
    device_id: str
    user_id: str
    account_id: str
    last_seen: str    
```"#,
    ],
    &[
        "# Tech Stack - 3/3\n## `Pydantic`\n",
        "Post-validation, the models optionally output specific objects,\n\n",
        "that conform, and get published away to the aforementioned microservices ",
        "(`Notifications`, `Accounts`, `Buckets`).",
    ],
    &[
        "# An example end-to-end flow\n",
        "## Processing data with `RSEvents` and sending a notification via `Notifications`\n",
        "### But first... \n",
    ],
];

const NOTIFICATIONS: &[Screen] = &[
    &[
        "# New `Notifications` under `RSEvents` - Feature Overview\n",
        "HomeSecure backend events may trigger manager notifications.\n\n",
        "For demonstration purposes, these notifications are separated into two groups:\n",
        "\n1. New (non-existing previously) manager notifications.\n",
        "2. Existing notifications.",
    ],
    &[
        "# HomeSecure events and their corresponding notifications: Existing vs New\n",
        "![25](assets/e2n-table.png)",
    ],
    &[
        "# A new Notification model (built by `DeviceEventLastSeen`):\n",
        r#"```python
class DeviceInActiveDeleted(BaseNotification):
   type_ = 'device_inactive_deleted  
   level = 'device'
   def __init__(self, account_id, user_id, device_id):
       data = {
           'account_id': account_id,
           'user_id': user_id,
           'device_id': device_id,
       }
       service_id = 'general'
       super().__init__(
           data,
           service_id,
           self.type_,
       )
```
"#,
        "After the event is processed by `RSEvents`, the notifications are instantiated, and are published via kafka to `as-notifications-incoming-topic`.\n",
    ],
    &[
        "# Here is a chart that demonstrates this whole flow:\n",
        "![34](assets/diagrams/notification_demo_flow_black.png)\n",
    ],
    &[
        "# Live demo! \n",
        "![5](assets/chibur.png)\n",
    ],
];
